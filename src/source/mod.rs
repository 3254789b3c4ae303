//! Turns the user supplied `usernames` argument into an ordered candidate
//! list.
//!
//! An argument naming an existing file is read line by line. Anything else
//! is an inline, whitespace separated list where `http(s)://` entries are
//! reduced to their path.

mod error;

pub use error::SourceError;

use std::fs;
use std::path::Path;

use url::Url;

use crate::scan::Candidate;

/// Resolve `source` into candidates, preserving order and duplicates.
pub fn resolve_candidates(source: &str) -> Result<Vec<Candidate>, SourceError> {
    if source.trim().is_empty() {
        return Err(SourceError::Empty);
    }
    let path = Path::new(source);
    if path.is_file() {
        read_candidates_file(path)
    } else {
        Ok(parse_inline(source))
    }
}

pub fn read_candidates_file(path: &Path) -> Result<Vec<Candidate>, SourceError> {
    let content =
        fs::read_to_string(path).map_err(|err| SourceError::unavailable(path, err))?;
    Ok(split_lines(&content))
}

/// Split on every line boundary: `\r\n`, a lone `\r` or `\n`, and the
/// Unicode separators `\x0b \x0c \x1c \x1d \x1e \u{85} \u{2028} \u{2029}`.
/// A trailing boundary does not yield an empty last line.
pub fn split_lines(text: &str) -> Vec<Candidate> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(text[start..idx].to_string());
        let mut end = idx + ch.len_utf8();
        if ch == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
            end += 1;
        }
        start = end;
    }
    if start < text.len() {
        lines.push(text[start..].to_string());
    }
    lines
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

pub fn parse_inline(list: &str) -> Vec<Candidate> {
    list.split_whitespace().map(strip_url).collect()
}

/// `http(s)://host/path/` becomes `path`; every other entry is kept as is.
///
/// The path is cut out of `entry` as typed, without percent-encoding or
/// dot-segment normalization.
pub fn strip_url(entry: &str) -> Candidate {
    match Url::parse(entry) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            raw_path(entry).trim_matches('/').to_string()
        }
        _ => entry.to_string(),
    }
}

/// Text between `scheme:[//authority]` and the first `?` or `#`.
fn raw_path(entry: &str) -> &str {
    let rest = entry.split_once(':').map_or(entry, |(_, rest)| rest);
    let rest = match rest.strip_prefix("//") {
        Some(authority_and_path) => {
            let end = authority_and_path
                .find(['/', '?', '#'])
                .unwrap_or(authority_and_path.len());
            &authority_and_path[end..]
        }
        None => rest,
    };
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

#[cfg(test)]
mod tests;
