use crate::project::SOURCE_EXTENSION;

/// How a test file name is told apart from a source file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestFileMatcher {
    /// `user_spec.rb`, `user_test.rb`
    Suffix(&'static str),
    /// `test_user.rb`
    Prefix(&'static str),
}

impl TestFileMatcher {
    pub fn matches(&self, path: &str) -> bool {
        self.source_name(file_name(path)).is_some()
    }

    /// Builds the test file name for a source path. The suffix form rewrites
    /// the first `.rb` anywhere in the path, matching `TestStyle::testify`.
    pub fn apply(&self, path: &str) -> String {
        match self {
            Self::Suffix(suffix) => {
                path.replacen(SOURCE_EXTENSION, &format!("{suffix}{SOURCE_EXTENSION}"), 1)
            }
            Self::Prefix(prefix) => {
                let (dir, name) = split_file_name(path);
                format!("{dir}{prefix}{name}")
            }
        }
    }

    /// Rewrites the final segment of a test path into its source file name.
    pub fn strip(&self, path: &str) -> Option<String> {
        let (dir, name) = split_file_name(path);
        let source = self.source_name(name)?;
        Some(format!("{dir}{source}"))
    }

    fn source_name(&self, name: &str) -> Option<String> {
        let stem = name.strip_suffix(SOURCE_EXTENSION)?;
        match self {
            Self::Suffix(suffix) => {
                let source = stem.strip_suffix(suffix)?;
                Some(format!("{source}{SOURCE_EXTENSION}"))
            }
            Self::Prefix(prefix) => {
                let source = stem.strip_prefix(prefix)?;
                if !source.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                    return None;
                }
                Some(format!("{source}{SOURCE_EXTENSION}"))
            }
        }
    }
}

fn file_name(path: &str) -> &str {
    split_file_name(path).1
}

fn split_file_name(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => path.split_at(idx + 1),
        None => ("", path),
    }
}
