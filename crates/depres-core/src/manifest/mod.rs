//! Tolerant, line-oriented extraction of dependency declarations.
//!
//! This is deliberately not a TOML parser. The scan is a single pass over
//! the lines of the manifest, tracking whether a dependency section is
//! active, and pulls `(name, version)` pairs out of the declaration shapes
//! that occur in practice: bare quoted strings, inline tables with a
//! `version` key, values with constraint operators, trailing comments.
//! Lines that fit none of those shapes are skipped, never an error.

mod section;

pub use section::SectionKind;

/// One declared dependency. Entries are not deduplicated: the same name
/// declared in both a normal and a dev section is reported twice, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    pub name: String,
    /// Version token with leading constraint operators stripped
    /// (`^1.2.0` -> `1.2.0`). Range semantics are intentionally discarded.
    pub version: String,
}

/// Scan state: either inside some dependency section or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    Dependencies,
}

/// Characters that may prefix a version token as constraint operators.
const CONSTRAINT_OPS: &[char] = &['~', '^', '>', '=', '<', '!'];

/// First quoted substring of `s`, for either quote style.
fn first_quoted(s: &str) -> Option<&str> {
    let start = s.find(|c| c == '"' || c == '\'')?;
    let quote = s[start..].chars().next()?;
    let rest = &s[start + quote.len_utf8()..];
    let end = rest.find(quote)?;
    Some(&rest[..end])
}

/// Raw version token from a declaration value, or `None` if the value
/// carries no version (e.g. a path- or git-sourced inline table).
fn raw_version(value: &str) -> Option<&str> {
    if !value.contains('{') {
        // Bare form: name = "1.2.3"
        return first_quoted(value);
    }
    // Inline table: only an explicit `version` key counts.
    let (_, rest) = value.split_once("version")?;
    let rest = rest.trim_start().strip_prefix('=')?;
    first_quoted(rest)
}

/// Strips constraint operators from a raw version token.
///
/// Multi-constraint values (`>=0.11, <0.12`) keep only the first token.
fn normalize_version(raw: &str) -> String {
    let first = raw.split(',').next().unwrap_or(raw);
    first
        .trim()
        .trim_start_matches(|c: char| CONSTRAINT_OPS.contains(&c))
        .trim()
        .to_string()
}

/// Extracts dependency entries from manifest text, in declaration order.
///
/// Pure function of its input; never fails. Unparseable lines are skipped.
pub fn extract(manifest: &str) -> Vec<DependencyEntry> {
    let mut entries = Vec::new();
    let mut section = Section::Outside;

    for raw_line in manifest.lines() {
        let line = match raw_line.find('#') {
            Some(idx) => &raw_line[..idx],
            None => raw_line,
        }
        .trim();
        if line.is_empty() {
            continue;
        }

        if SectionKind::from_header(line).is_some() {
            section = Section::Dependencies;
            continue;
        }
        if line.starts_with('[') {
            // Any other section ends dependency scanning.
            section = Section::Outside;
            continue;
        }
        if section != Section::Dependencies {
            continue;
        }

        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let Some(raw) = raw_version(value.trim()) else {
            continue;
        };
        let version = normalize_version(raw);
        if version.is_empty() {
            continue;
        }
        entries.push(DependencyEntry {
            name: name.to_string(),
            version,
        });
    }

    entries
}
