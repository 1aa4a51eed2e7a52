use std::path::{Path, PathBuf};

use super::fs::{FileSystem, Glob, OsFileSystem};
use super::{
    MANIFEST_EXTENSION, SOURCE_EXTENSION, SPEC_DOTFILE, SPEC_HELPER, SPEC_ROOT, UNIT_ROOT,
};
use crate::resolver::TestFileMatcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// A gem: a `*.gemspec` at the root, code in `lib/` or the root itself.
    Library,
    /// Anything else, code in `app/` and `lib/`.
    Application,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestStyle {
    /// RSpec: `spec/**/*_spec.rb`
    Spec,
    /// Minitest / test-unit: `test/**/*_test.rb` or `test/**/test_*.rb`
    Unit,
}

impl Layout {
    pub fn from_flag(is_library: bool) -> Self {
        if is_library {
            Self::Library
        } else {
            Self::Application
        }
    }

    /// Search order when mapping a test back to its source.
    pub fn source_dirs(self) -> Vec<String> {
        match self {
            Self::Library => vec!["lib".to_string(), String::new()],
            Self::Application => vec!["app".to_string(), "lib".to_string()],
        }
    }
}

impl TestStyle {
    pub fn from_flag(uses_spec: bool) -> Self {
        if uses_spec {
            Self::Spec
        } else {
            Self::Unit
        }
    }

    pub fn test_root(self) -> &'static str {
        match self {
            Self::Spec => SPEC_ROOT,
            Self::Unit => UNIT_ROOT,
        }
    }

    pub fn test_dirs(self) -> Vec<String> {
        let root = self.test_root();
        vec![root.to_string(), format!("{root}/lib")]
    }

    pub fn test_matchers(self) -> Vec<TestFileMatcher> {
        match self {
            Self::Spec => vec![TestFileMatcher::Suffix("_spec")],
            Self::Unit => vec![
                TestFileMatcher::Suffix("_test"),
                TestFileMatcher::Prefix("test_"),
            ],
        }
    }

    pub fn test_suffix(self) -> String {
        match self {
            Self::Spec => format!("_spec{SOURCE_EXTENSION}"),
            Self::Unit => format!("_test{SOURCE_EXTENSION}"),
        }
    }

    /// `user.rb` -> `user_spec.rb`; only the first `.rb` is rewritten.
    pub fn testify(self, path: &str) -> String {
        path.replacen(SOURCE_EXTENSION, &self.test_suffix(), 1)
    }
}

/// Conventions of a Ruby project rooted at `root`.
///
/// Nothing is cached: every accessor probes the filesystem again, so answers
/// follow the tree if it changes between calls.
#[derive(Debug, Clone)]
pub struct ProjectConvention<F = OsFileSystem> {
    root: PathBuf,
    fs: F,
}

impl ProjectConvention<OsFileSystem> {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_fs(root, OsFileSystem)
    }
}

impl<F: FileSystem> ProjectConvention<F> {
    pub fn with_fs(root: impl AsRef<Path>, fs: F) -> Self {
        Self {
            root: trim_trailing_separator(root.as_ref()),
            fs,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn is_library_layout(&self) -> bool {
        let found = self
            .fs
            .has_match(&Glob::extension(&self.root, MANIFEST_EXTENSION));
        tracing::trace!(found, "gemspec probe in {}", self.root.display());
        found
    }

    pub fn uses_spec_convention(&self) -> bool {
        self.fs
            .exists(&self.root.join(SPEC_ROOT).join(SPEC_HELPER))
            || self.fs.exists(&self.root.join(SPEC_DOTFILE))
            || self
                .fs
                .has_match(&Glob::file_name(&self.root, SPEC_HELPER))
    }

    pub fn layout(&self) -> Layout {
        Layout::from_flag(self.is_library_layout())
    }

    pub fn test_style(&self) -> TestStyle {
        TestStyle::from_flag(self.uses_spec_convention())
    }

    pub fn source_dirs(&self) -> Vec<String> {
        self.layout().source_dirs()
    }

    pub fn test_root(&self) -> &'static str {
        self.test_style().test_root()
    }

    pub fn test_dirs(&self) -> Vec<String> {
        self.test_style().test_dirs()
    }

    pub fn test_matchers(&self) -> Vec<TestFileMatcher> {
        self.test_style().test_matchers()
    }

    pub fn test_suffix(&self) -> String {
        self.test_style().test_suffix()
    }

    pub fn testify(&self, path: &str) -> String {
        self.test_style().testify(path)
    }
}

fn trim_trailing_separator(root: &Path) -> PathBuf {
    let raw = root.to_string_lossy();
    match raw.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => PathBuf::from(trimmed),
        _ => root.to_path_buf(),
    }
}
