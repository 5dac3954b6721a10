use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Category of a style violation.
///
/// Each kind has a stable code (used in reports and the exceptions file) and
/// a fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViolationKind {
    MissingOrMalformedCopyright,
    MultipleImportsPerLine,
    MissingOrLateModuleDoc,
    LineTooLong,
    ForbiddenCharacter,
    ReservedNotationMisuse,
    ForbiddenSetOption,
}

impl ViolationKind {
    pub const ALL: [Self; 7] = [
        Self::MissingOrMalformedCopyright,
        Self::MultipleImportsPerLine,
        Self::MissingOrLateModuleDoc,
        Self::LineTooLong,
        Self::ForbiddenCharacter,
        Self::ReservedNotationMisuse,
        Self::ForbiddenSetOption,
    ];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingOrMalformedCopyright => "ERR_COP",
            Self::MultipleImportsPerLine => "ERR_IMP",
            Self::MissingOrLateModuleDoc => "ERR_MOD",
            Self::LineTooLong => "ERR_LIN",
            Self::ForbiddenCharacter => "ERR_SAV",
            Self::ReservedNotationMisuse => "ERR_RNT",
            Self::ForbiddenSetOption => "ERR_OPT",
        }
    }

    /// Human-readable message. `max_line_length` only affects `LineTooLong`.
    #[must_use]
    pub fn message(self, max_line_length: usize) -> String {
        match self {
            Self::MissingOrMalformedCopyright => "Malformed or missing copyright header".to_string(),
            Self::MultipleImportsPerLine => "More than one file imported per line".to_string(),
            Self::MissingOrLateModuleDoc => "Module docstring missing, or too late".to_string(),
            Self::LineTooLong => format!("Line has more than {max_line_length} characters"),
            Self::ForbiddenCharacter => "File contains the character ᾰ".to_string(),
            Self::ReservedNotationMisuse => {
                "Reserved notation outside tactic.reserved_notation".to_string()
            }
            Self::ForbiddenSetOption => "Forbidden set_option command".to_string(),
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ViolationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown violation code: {s}"))
    }
}

impl Serialize for ViolationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// A single style issue at a line of a file.
///
/// Line 0 marks a file-level problem (the copyright header never started).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub line: usize,
    pub path: PathBuf,
}

impl Violation {
    #[must_use]
    pub fn new(kind: ViolationKind, line: usize, path: &Path) -> Self {
        Self {
            kind,
            line,
            path: path.to_path_buf(),
        }
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
