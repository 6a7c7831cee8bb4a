//! Recognized dependency section headers.

/// Kind of manifest section that declares dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Normal,
    Dev,
    Build,
}

/// Header prefixes, kept as one table so adding a section kind later is a
/// single-line change. Prefix match also covers dotted sub-tables like
/// `[dependencies.serde]`.
const HEADER_PREFIXES: [(&str, SectionKind); 3] = [
    ("[dependencies", SectionKind::Normal),
    ("[dev-dependencies", SectionKind::Dev),
    ("[build-dependencies", SectionKind::Build),
];

impl SectionKind {
    /// Matches a trimmed line against the recognized dependency headers.
    pub fn from_header(line: &str) -> Option<SectionKind> {
        HEADER_PREFIXES
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix))
            .map(|(_, kind)| *kind)
    }
}
