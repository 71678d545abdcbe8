use super::{CheckupConfig, FormatSpec, ReportSpec};
use crate::diagnose::Severity;

#[test]
fn defaults_load_successfully() {
    let config = CheckupConfig::load(None).expect("Should load default config");
    assert!(config.general.color);
    assert!(config.resolver.search_path.is_empty());
    assert!(config.reports.is_empty());
}

#[test]
fn default_config_validates() {
    let config = CheckupConfig::load(None).unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn custom_config_file_is_extracted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        r#"
[resolver]
search_path = ["deploy/meta"]

[[reports]]
resource = "git.properties"
keys = ["git.branch", "git.commit.id"]
severity = "critical"

[[reports.formats]]
key = "git.commit.id"
name = "commit"
template = "sha={value}"
"#,
    )
    .unwrap();

    let config = CheckupConfig::load(path.to_str()).unwrap();
    assert_eq!(config.resolver.search_path, vec!["deploy/meta"]);
    assert_eq!(config.reports.len(), 1);

    let report = &config.reports[0];
    assert_eq!(report.resource, "git.properties");
    assert_eq!(report.severity, Severity::Critical);
    assert_eq!(report.formats[0].name.as_deref(), Some("commit"));
    assert_eq!(report.formats[0].template.as_deref(), Some("sha={value}"));
    assert!(config.validate().is_ok());
}

#[test]
fn validate_rejects_empty_resource_name() {
    let config = CheckupConfig {
        reports: vec![ReportSpec {
            resource: "  ".into(),
            keys: vec![],
            severity: Severity::None,
            formats: vec![],
        }],
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_duplicate_format_keys() {
    let format = FormatSpec {
        key: "git.branch".into(),
        name: None,
        template: None,
    };
    let config = CheckupConfig {
        reports: vec![ReportSpec {
            resource: "git.properties".into(),
            keys: vec![],
            severity: Severity::None,
            formats: vec![format.clone(), format],
        }],
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("git.branch"));
}
