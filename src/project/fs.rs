use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The two shapes of glob the convention detector needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glob {
    /// `dir/*.extension`, not recursive.
    Extension { dir: PathBuf, extension: String },
    /// `root/**/name`, any depth below `root`.
    FileName { root: PathBuf, name: String },
}

impl Glob {
    pub fn extension(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self::Extension {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn file_name(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self::FileName {
            root: root.into(),
            name: name.into(),
        }
    }
}

/// Filesystem probing used by convention detection and alternate resolution.
///
/// Implementations never fail: anything that cannot be read counts as absent.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn glob(&self, pattern: &Glob) -> Vec<PathBuf>;

    /// `true` if `pattern` matches anything. Implementations may stop early.
    fn has_match(&self, pattern: &Glob) -> bool {
        !self.glob(pattern).is_empty()
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn glob(&self, pattern: &Glob) -> Vec<PathBuf> {
        (**self).glob(pattern)
    }

    fn has_match(&self, pattern: &Glob) -> bool {
        (**self).has_match(pattern)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }

    fn glob(&self, pattern: &Glob) -> Vec<PathBuf> {
        match pattern {
            Glob::Extension { dir, extension } => {
                let entries = match fs::read_dir(dir) {
                    Ok(entries) => entries,
                    Err(e) => {
                        tracing::trace!("cannot list {}: {e}", dir.display());
                        return Vec::new();
                    }
                };
                entries
                    .flatten()
                    .map(|entry| entry.path())
                    .filter(|path| has_extension(path, extension))
                    .collect()
            }
            Glob::FileName { root, name } => walk_named(root, name).collect(),
        }
    }

    fn has_match(&self, pattern: &Glob) -> bool {
        match pattern {
            Glob::FileName { root, name } => walk_named(root, name).next().is_some(),
            Glob::Extension { .. } => !self.glob(pattern).is_empty(),
        }
    }
}

/// Directories never descended into when searching by file name.
const EXCLUDED_DIRS: &[&str] = &["node_modules"];

fn walk_named<'a>(root: &Path, name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let dir_name = e.file_name().to_string_lossy();
            !dir_name.starts_with('.') && !EXCLUDED_DIRS.contains(&dir_name.as_ref())
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::trace!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(move |entry| entry.file_name() == name)
        .map(|entry| entry.into_path())
}

/// `*.ext` semantics: a file named exactly `.gemspec` matches `gemspec`.
fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.strip_suffix(extension).is_some_and(|rest| rest.ends_with('.')))
}

/// An in-memory tree: a set of file paths, directories implied by their parents.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: BTreeSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add(&mut self, path: impl Into<PathBuf>) {
        self.files.insert(path.into());
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path) || self.files.iter().any(|f| f.starts_with(path))
    }

    fn glob(&self, pattern: &Glob) -> Vec<PathBuf> {
        match pattern {
            Glob::Extension { dir, extension } => self
                .files
                .iter()
                .filter(|f| f.parent() == Some(dir.as_path()))
                .filter(|f| has_extension(f, extension))
                .cloned()
                .collect(),
            Glob::FileName { root, name } => self
                .files
                .iter()
                .filter(|f| f.starts_with(root))
                .filter(|f| f.file_name().is_some_and(|n| n == name.as_str()))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_os_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("user.rb");
        fs::File::create(&file).unwrap();

        assert!(OsFileSystem.exists(&file));
        assert!(!OsFileSystem.exists(&temp_dir.path().join("missing.rb")));
    }

    #[test]
    fn test_os_glob_extension_is_top_level_only() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("vendor")).unwrap();
        fs::File::create(root.join("my_gem.gemspec")).unwrap();
        fs::File::create(root.join("vendor/other.gemspec")).unwrap();
        fs::File::create(root.join("Gemfile")).unwrap();

        let matches = OsFileSystem.glob(&Glob::extension(root, "gemspec"));

        assert_eq!(matches, vec![root.join("my_gem.gemspec")]);
    }

    #[test]
    fn test_os_glob_extension_missing_dir() {
        let matches = OsFileSystem.glob(&Glob::extension("/nonexistent/dir/for/glob", "gemspec"));
        assert!(matches.is_empty());
    }

    #[test]
    fn test_os_glob_file_name_recurses() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("engines/billing/spec")).unwrap();
        fs::File::create(root.join("engines/billing/spec/spec_helper.rb")).unwrap();

        let matches = OsFileSystem.glob(&Glob::file_name(root, "spec_helper.rb"));

        assert_eq!(matches, vec![root.join("engines/billing/spec/spec_helper.rb")]);
    }

    #[test]
    fn test_os_glob_extension_matches_bare_dotfile() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::File::create(root.join(".gemspec")).unwrap();
        fs::File::create(root.join("notes.mygemspec")).unwrap();

        let matches = OsFileSystem.glob(&Glob::extension(root, "gemspec"));

        assert_eq!(matches, vec![root.join(".gemspec")]);
    }

    #[test]
    fn test_os_has_match_stops_at_first_hit() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/spec")).unwrap();
        fs::create_dir_all(root.join("b/spec")).unwrap();
        fs::File::create(root.join("a/spec/spec_helper.rb")).unwrap();
        fs::File::create(root.join("b/spec/spec_helper.rb")).unwrap();

        assert!(OsFileSystem.has_match(&Glob::file_name(root, "spec_helper.rb")));
        assert!(!OsFileSystem.has_match(&Glob::file_name(root, "rails_helper.rb")));
    }

    #[test]
    fn test_os_glob_file_name_skips_node_modules() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("node_modules/pkg/spec")).unwrap();
        fs::File::create(root.join("node_modules/pkg/spec/spec_helper.rb")).unwrap();

        assert!(!OsFileSystem.has_match(&Glob::file_name(root, "spec_helper.rb")));
    }

    #[test]
    fn test_os_glob_file_name_skips_hidden_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(".bundle/gems/spec")).unwrap();
        fs::File::create(root.join(".bundle/gems/spec/spec_helper.rb")).unwrap();

        let matches = OsFileSystem.glob(&Glob::file_name(root, "spec_helper.rb"));

        assert!(matches.is_empty());
    }

    #[test]
    fn test_memory_exists_implies_directories() {
        let fs = MemoryFileSystem::with_files(["/p/lib/user.rb"]);

        assert!(fs.exists(Path::new("/p/lib/user.rb")));
        assert!(fs.exists(Path::new("/p/lib")));
        assert!(!fs.exists(Path::new("/p/app")));
    }

    #[test]
    fn test_memory_glob() {
        let mut fs = MemoryFileSystem::new();
        fs.add("/p/a.gemspec");
        fs.add("/p/nested/b.gemspec");
        fs.add("/p/nested/spec/spec_helper.rb");

        assert_eq!(
            fs.glob(&Glob::extension("/p", "gemspec")),
            vec![PathBuf::from("/p/a.gemspec")]
        );
        assert_eq!(
            fs.glob(&Glob::file_name("/p", "spec_helper.rb")),
            vec![PathBuf::from("/p/nested/spec/spec_helper.rb")]
        );
    }
}
