//! Integration tests for `fix_file`.

use std::{fs, io::ErrorKind};

use markdown_fix::{fix_file, FixerBuilder, Rule};

#[test]
fn file_is_rewritten_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("README.md");
    fs::write(&path, "#  Title:\nSee https://example.com\n").unwrap();

    fix_file(&path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# Title\n\nSee <https://example.com>\n"
    );
}

#[test]
fn builder_settings_apply_to_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guide.md");
    fs::write(&path, "```\nhello\n```\nhttps://example.com\n").unwrap();

    let mut builder = FixerBuilder::default();
    builder
        .fallback_language("plaintext")
        .disable_rule(Rule::BareUrls);
    builder.build().fix_file(&path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "```plaintext\nhello\n```\n\nhttps://example.com\n"
    );
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.md");

    let error = fix_file(&path).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert!(!path.exists());
}

#[test]
fn invalid_utf8_is_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.md");
    let bytes = b"#  Title:\n\xff\xfe\n".to_vec();
    fs::write(&path, &bytes).unwrap();

    let error = fix_file(&path).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidData);
    assert_eq!(fs::read(&path).unwrap(), bytes);
}
