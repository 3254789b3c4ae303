use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;

use super::{
    SourceError, parse_inline, read_candidates_file, resolve_candidates, split_lines, strip_url,
};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "vrfyscan-{}-{name}.txt",
            std::process::id()
        ));
        fs::write(&path, contents).expect("write temp file");
        Self { path }
    }

    fn as_str(&self) -> &str {
        self.path.to_str().expect("utf8 temp path")
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn inline_list_splits_on_whitespace() {
    let out = resolve_candidates("root  admin\tpostmaster").expect("inline");
    assert_eq!(out, vec!["root", "admin", "postmaster"]);
}

#[test]
fn inline_list_keeps_duplicates_and_order() {
    let out = parse_inline("b a b");
    assert_eq!(out, vec!["b", "a", "b"]);
}

#[test]
fn http_urls_are_reduced_to_their_path() {
    assert_eq!(strip_url("http://mail.example.com/alice"), "alice");
    assert_eq!(strip_url("https://example.com/team/bob/"), "team/bob");
    assert_eq!(strip_url("https://example.com"), "");
}

#[test]
fn url_path_is_taken_as_typed() {
    assert_eq!(strip_url("http://host/josé"), "josé");
    assert_eq!(strip_url("http://host/a/../root"), "a/../root");
    assert_eq!(strip_url("http://host/dom\\user"), "dom\\user");
    assert_eq!(strip_url("http://host/%41lice"), "%41lice");
    assert_eq!(strip_url("http:alice"), "alice");
    assert_eq!(strip_url("HTTPS://host/bob?x=1#frag"), "bob");
    assert_eq!(strip_url("http://user:pw@host:8080/carol/"), "carol");
}

#[test]
fn other_entries_are_kept_verbatim() {
    assert_eq!(strip_url("alice@example.com"), "alice@example.com");
    assert_eq!(strip_url("ftp://example.com/carol"), "ftp://example.com/carol");
    assert_eq!(strip_url("mailto:dave@example.com"), "mailto:dave@example.com");
}

#[test]
fn mixed_inline_list() {
    let out =
        resolve_candidates("root https://corp.example/jsmith/ admin@corp.example").expect("inline");
    assert_eq!(out, vec!["root", "jsmith", "admin@corp.example"]);
}

#[test]
fn blank_source_is_rejected() {
    assert!(matches!(resolve_candidates(""), Err(SourceError::Empty)));
    assert!(matches!(resolve_candidates("   "), Err(SourceError::Empty)));
}

#[test]
fn file_source_reads_one_candidate_per_line() {
    let file = TempFile::new("lines", "root\r\nadmin\n\nroot\n");
    let out = resolve_candidates(file.as_str()).expect("file");
    assert_eq!(out, vec!["root", "admin", "", "root"]);
}

#[test]
fn bare_carriage_returns_split_lines() {
    let file = TempFile::new("mac", "root\radmin\r");
    let out = resolve_candidates(file.as_str()).expect("file");
    assert_eq!(out, vec!["root", "admin"]);
}

#[test]
fn every_line_boundary_splits() {
    let text = "a\x0bb\x0cc\x1cd\x1de\x1ef\u{85}g\u{2028}h\u{2029}i\r\nj\n\rk";
    assert_eq!(
        split_lines(text),
        vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "", "k"]
    );
    assert!(split_lines("").is_empty());
    assert_eq!(split_lines("root\n\n"), vec!["root", ""]);
}

#[test]
fn file_lines_are_not_url_stripped() {
    let file = TempFile::new("urls", "http://example.com/alice\n");
    let out = resolve_candidates(file.as_str()).expect("file");
    assert_eq!(out, vec!["http://example.com/alice"]);
}

#[test]
fn unreadable_file_is_unavailable() {
    let missing = std::env::temp_dir().join("vrfyscan-definitely-missing.txt");
    let err = read_candidates_file(&missing).expect_err("missing file");
    match err {
        SourceError::Unavailable { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_path_falls_back_to_inline() {
    let out = resolve_candidates("/no/such/users.txt").expect("inline");
    assert_eq!(out, vec!["/no/such/users.txt"]);
}

proptest! {
    #[test]
    fn inline_preserves_plain_tokens(
        tokens in prop::collection::vec("[a-z][a-z0-9._-]{0,12}", 0..16)
    ) {
        let joined = tokens.join(" ");
        prop_assert_eq!(parse_inline(&joined), tokens);
    }

    #[test]
    fn inline_never_fabricates(input in "[a-z /:.]{0,40}") {
        let out = parse_inline(&input);
        prop_assert!(out.len() <= input.split_whitespace().count());
    }
}
