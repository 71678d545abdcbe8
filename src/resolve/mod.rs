//! Resource resolution for diagnostic tasks
//!
//! A resource name is resolved through an ordered sequence of lookups, the
//! first hit short-circuiting the rest:
//!
//! 1. the embedded resource table (contents registered in-process),
//! 2. each directory on the search path, joined with the name,
//! 3. the name taken as a plain filesystem path.
//!
//! Every lookup returns an optional stream; a miss on all three means the
//! resource does not exist anywhere the resolver knows about.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ResolverConfig;

/// Environment variable holding extra `:`-separated search directories
pub const SEARCH_PATH_ENV: &str = "CHECKUP_PATH";

/// Locates named resources via embedded contents, a search path, and disk
#[derive(Debug, Clone, Default)]
pub struct ResourceResolver {
    embedded: HashMap<String, String>,
    search_path: Vec<PathBuf>,
}

impl ResourceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a resolver from configuration, appending any directories named
    /// by the `CHECKUP_PATH` environment variable
    pub fn from_config(config: &ResolverConfig) -> Self {
        let mut resolver = Self::new();
        for dir in &config.search_path {
            resolver.add_search_dir(dir);
        }
        if let Ok(env_path) = std::env::var(SEARCH_PATH_ENV) {
            for dir in env_path.split(':').filter(|d| !d.is_empty()) {
                resolver.add_search_dir(dir);
            }
        }
        resolver
    }

    /// Append a directory to the search path
    pub fn add_search_dir(&mut self, dir: impl AsRef<Path>) {
        self.search_path.push(dir.as_ref().to_path_buf());
    }

    /// Register in-process contents under a resource name. Embedded entries
    /// win over search-path and filesystem lookups.
    pub fn register_embedded(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.embedded.insert(name.into(), contents.into());
    }

    /// Open the named resource, trying each lookup in order
    pub fn open(&self, name: &str) -> Option<Box<dyn Read>> {
        self.open_embedded(name)
            .or_else(|| self.open_search_path(name))
            .or_else(|| self.open_direct(name))
    }

    fn open_embedded(&self, name: &str) -> Option<Box<dyn Read>> {
        let contents = self.embedded.get(name)?;
        debug!(resource = name, "resolved from embedded table");
        Some(Box::new(Cursor::new(contents.clone().into_bytes())))
    }

    fn open_search_path(&self, name: &str) -> Option<Box<dyn Read>> {
        self.search_path.iter().find_map(|dir| {
            let candidate = dir.join(name);
            match File::open(&candidate) {
                Ok(file) => {
                    debug!(resource = name, path = %candidate.display(), "resolved from search path");
                    Some(Box::new(file) as Box<dyn Read>)
                }
                Err(_) => None,
            }
        })
    }

    fn open_direct(&self, name: &str) -> Option<Box<dyn Read>> {
        match File::open(name) {
            Ok(file) => {
                debug!(resource = name, "resolved from filesystem path");
                Some(Box::new(file))
            }
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn read_all(mut stream: Box<dyn Read>) -> String {
        let mut out = String::new();
        stream.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn missing_resource_resolves_to_none() {
        let resolver = ResourceResolver::new();
        assert!(resolver.open("no/such/resource.properties").is_none());
    }

    #[test]
    fn embedded_contents_are_served() {
        let mut resolver = ResourceResolver::new();
        resolver.register_embedded("build.properties", "version=1.2.3\n");
        let stream = resolver.open("build.properties").unwrap();
        assert_eq!(read_all(stream), "version=1.2.3\n");
    }

    #[test]
    fn search_path_is_consulted_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(first.path().join("app.properties"), "from=first\n").unwrap();
        std::fs::write(second.path().join("app.properties"), "from=second\n").unwrap();

        let mut resolver = ResourceResolver::new();
        resolver.add_search_dir(first.path());
        resolver.add_search_dir(second.path());

        let stream = resolver.open("app.properties").unwrap();
        assert_eq!(read_all(stream), "from=first\n");
    }

    #[test]
    fn embedded_wins_over_search_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.properties"), "from=disk\n").unwrap();

        let mut resolver = ResourceResolver::new();
        resolver.add_search_dir(dir.path());
        resolver.register_embedded("app.properties", "from=embedded\n");

        let stream = resolver.open("app.properties").unwrap();
        assert_eq!(read_all(stream), "from=embedded\n");
    }

    #[test]
    fn plain_path_is_the_final_fallback() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "direct=yes").unwrap();

        let resolver = ResourceResolver::new();
        let stream = resolver.open(file.path().to_str().unwrap()).unwrap();
        assert_eq!(read_all(stream), "direct=yes\n");
    }
}
