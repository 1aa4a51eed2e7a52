//! Alternate file resolution.
//!
//! A path is either a test file (it matches one of the project's test file
//! matchers) or a source file. Source files are mapped onto candidate test
//! paths and test files back onto candidate source paths; the first candidate
//! that exists under the project root wins.
//!
//! Directory names are swapped with first-occurrence substring replacement,
//! so a directory name that also appears earlier in the path (`lib/test/...`)
//! can be substituted in the wrong place.

mod matcher;
mod rules;

pub use matcher::TestFileMatcher;
pub use rules::{PairRule, CONTROLLER_REQUEST_SPEC};

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::project::{FileSystem, ProjectConvention};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Source,
    Test,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Source => "source",
            FileKind::Test => "test",
        }
    }
}

pub struct AlternateResolver<'a, F> {
    project: &'a ProjectConvention<F>,
}

impl<'a, F: FileSystem> AlternateResolver<'a, F> {
    pub fn new(project: &'a ProjectConvention<F>) -> Self {
        Self { project }
    }

    pub fn classify(&self, path: &str) -> FileKind {
        if self
            .project
            .test_matchers()
            .iter()
            .any(|matcher| matcher.matches(path))
        {
            FileKind::Test
        } else {
            FileKind::Source
        }
    }

    /// Returns the alternate of `path` (relative to the root), or `None` when
    /// no candidate exists.
    pub fn resolve(&self, path: &str) -> Option<PathBuf> {
        match self.classify(path) {
            FileKind::Test => self.find_alternate_source(path),
            FileKind::Source => self.find_alternate_test(path),
        }
    }

    /// Every candidate `resolve` would probe, in order, relative to the root.
    pub fn candidates(&self, path: &str) -> Vec<String> {
        match self.classify(path) {
            FileKind::Test => self.source_candidates(path),
            FileKind::Source => self.test_candidates(path),
        }
    }

    pub fn find_alternate_test(&self, path: &str) -> Option<PathBuf> {
        self.first_existing(self.test_candidates(path))
    }

    pub fn find_alternate_source(&self, path: &str) -> Option<PathBuf> {
        self.first_existing(self.source_candidates(path))
    }

    fn test_candidates(&self, path: &str) -> Vec<String> {
        let mut candidates: Vec<String> =
            CONTROLLER_REQUEST_SPEC.test_for(path).into_iter().collect();

        let test_dirs = self.project.test_dirs();
        let source_dirs = self.project.source_dirs();
        let matchers = self.project.test_matchers();

        for test_dir in &test_dirs {
            for source_dir in &source_dirs {
                let swapped = if source_dir.is_empty() {
                    format!("{test_dir}/{path}")
                } else {
                    path.replacen(source_dir.as_str(), test_dir, 1)
                };
                candidates.extend(matchers.iter().map(|matcher| matcher.apply(&swapped)));
            }
        }
        candidates
    }

    fn source_candidates(&self, path: &str) -> Vec<String> {
        let mut candidates: Vec<String> =
            CONTROLLER_REQUEST_SPEC.source_for(path).into_iter().collect();

        let source_dirs = self.project.source_dirs();
        let test_dirs = self.project.test_dirs();
        let matchers = self.project.test_matchers();

        for source_dir in &source_dirs {
            for test_dir in &test_dirs {
                let swapped = path.replacen(test_dir.as_str(), source_dir, 1);
                candidates.extend(matchers.iter().filter_map(|matcher| matcher.strip(&swapped)));
            }
        }
        candidates
    }

    fn first_existing(&self, candidates: Vec<String>) -> Option<PathBuf> {
        let found = candidates.into_iter().find_map(|candidate| {
            let target = join_relative(self.project.root(), &candidate);
            let exists = self.project.fs().exists(&target);
            tracing::trace!(candidate = %target.display(), exists, "probing candidate");
            exists.then_some(target)
        });

        match &found {
            Some(target) => tracing::debug!("resolved alternate {}", target.display()),
            None => tracing::debug!("no alternate found"),
        }
        found
    }
}

/// Joins a `/`-separated relative path onto `root`, dropping empty and `.`
/// segments so a leading `/` or doubled separator cannot escape the root.
pub fn join_relative(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}
