use super::{Properties, PropertiesError};

#[test]
fn parses_equals_and_colon_separators() {
    let props = Properties::parse("a=1\nb: 2\nc : 3\n").unwrap();
    assert_eq!(props.get("a"), Some("1"));
    assert_eq!(props.get("b"), Some("2"));
    assert_eq!(props.get("c"), Some("3"));
}

#[test]
fn parses_whitespace_separator() {
    let props = Properties::parse("cheeses gouda, brie\n").unwrap();
    assert_eq!(props.get("cheeses"), Some("gouda, brie"));
}

#[test]
fn skips_comments_and_blank_lines() {
    let input = "# hash comment\n! bang comment\n\n   \na=1\n";
    let props = Properties::parse(input).unwrap();
    assert_eq!(props.len(), 1);
    assert_eq!(props.get("a"), Some("1"));
}

#[test]
fn comment_marker_after_leading_whitespace() {
    let props = Properties::parse("   # indented comment\na=1\n").unwrap();
    assert_eq!(props.len(), 1);
}

#[test]
fn joins_continuation_lines_and_strips_their_indent() {
    let input = "fruits apple, banana, \\\n        pear, cantaloupe\n";
    let props = Properties::parse(input).unwrap();
    assert_eq!(props.get("fruits"), Some("apple, banana, pear, cantaloupe"));
}

#[test]
fn double_backslash_at_line_end_is_data_not_continuation() {
    let props = Properties::parse("path=C\\\\\nnext=1\n").unwrap();
    assert_eq!(props.get("path"), Some("C\\"));
    assert_eq!(props.get("next"), Some("1"));
}

#[test]
fn comment_lines_are_never_continued() {
    let props = Properties::parse("# looks continued \\\na=1\n").unwrap();
    assert_eq!(props.get("a"), Some("1"));
}

#[test]
fn continuation_line_starting_with_hash_is_data() {
    let props = Properties::parse("key=one \\\n#two\n").unwrap();
    assert_eq!(props.get("key"), Some("one #two"));
}

#[test]
fn expands_character_escapes() {
    let props = Properties::parse("tabs=a\\tb\\nc\nunicode=\\u0041\\u00e9\n").unwrap();
    assert_eq!(props.get("tabs"), Some("a\tb\nc"));
    assert_eq!(props.get("unicode"), Some("Aé"));
}

#[test]
fn escaped_separator_stays_in_key() {
    let props = Properties::parse("a\\=b=c\nspaced\\ key=v\n").unwrap();
    assert_eq!(props.get("a=b"), Some("c"));
    assert_eq!(props.get("spaced key"), Some("v"));
}

#[test]
fn short_unicode_escape_reports_line_number() {
    let err = Properties::parse("ok=1\nbad=\\u00g1\n").unwrap_err();
    match err {
        PropertiesError::MalformedUnicodeEscape { line } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    let props = Properties::parse("k=first\nk=second\n").unwrap();
    assert_eq!(props.get("k"), Some("second"));
}

#[test]
fn empty_and_missing_values() {
    let props = Properties::parse("empty=\nbare\n").unwrap();
    assert_eq!(props.get("empty"), Some(""));
    assert_eq!(props.get("bare"), Some(""));
}

#[test]
fn empty_document_parses_to_empty_properties() {
    let props = Properties::parse("").unwrap();
    assert!(props.is_empty());
}

#[test]
fn load_reads_from_a_stream() {
    let props = Properties::load("a=1\n".as_bytes()).unwrap();
    assert_eq!(props.get("a"), Some("1"));
}
