//! Shared helpers for the per-check test modules.

use crate::source::SourceFile;

use super::{Violation, ViolationKind};

pub const HEADER: &str = "/-\n\
Copyright (c) 2020 Jane Doe. All rights reserved.\n\
Released under Apache 2.0 license as described in the file LICENSE.\n\
Authors: Jane Doe\n\
-/\n";

pub fn file(source: &str) -> SourceFile {
    SourceFile::from_source("src/test.lean", source)
}

/// `(kind, line)` pairs, dropping the path.
pub fn found(violations: &[Violation]) -> Vec<(ViolationKind, usize)> {
    violations.iter().map(|v| (v.kind, v.line)).collect()
}

/// Line numbers of every violation.
pub fn lines_of(violations: &[Violation]) -> Vec<usize> {
    violations.iter().map(|v| v.line).collect()
}
