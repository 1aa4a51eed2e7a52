mod convention;
pub mod fs;

pub use convention::{Layout, ProjectConvention, TestStyle};
pub use fs::{FileSystem, Glob, MemoryFileSystem, OsFileSystem};

pub const SOURCE_EXTENSION: &str = ".rb";
pub const MANIFEST_EXTENSION: &str = "gemspec";
pub const SPEC_ROOT: &str = "spec";
pub const UNIT_ROOT: &str = "test";
pub const SPEC_HELPER: &str = "spec_helper.rb";
pub const SPEC_DOTFILE: &str = ".rspec";
