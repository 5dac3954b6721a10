#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the lint-style binary.
#[macro_export]
macro_rules! lint_style {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("lint-style"))
    };
}

/// Copyright block every well-formed source starts with.
pub const HEADER: &str = "/-
Copyright (c) 2021 Jane Doe. All rights reserved.
Released under Apache 2.0 license as described in the file LICENSE.
Authors: Jane Doe
-/
";

/// Well-formed file: header, one import, module docstring, a definition.
pub const CLEAN_SOURCE: &str = "/-
Copyright (c) 2021 Jane Doe. All rights reserved.
Released under Apache 2.0 license as described in the file LICENSE.
Authors: Jane Doe
-/
import data.nat.basic

/-!
# Basics
-/

def double (n : ℕ) := n + n
";

/// Default location of the exceptions file under the project root.
pub const EXCEPTIONS_PATH: &str = "scripts/style-exceptions.txt";

/// Creates a temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.lint-style.toml` config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".lint-style.toml", content);
    }

    /// Writes the exceptions file at its default location.
    pub fn create_exceptions(&self, content: &str) {
        self.create_file(EXCEPTIONS_PATH, content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
