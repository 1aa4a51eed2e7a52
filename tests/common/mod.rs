//! Shared helpers for building throwaway Ruby project trees.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates an empty file for every relative path, with parent directories.
pub fn project_tree(files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for file in files {
        let path = temp_dir.path().join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::File::create(&path).unwrap();
    }
    temp_dir
}

pub fn expected(temp_dir: &TempDir, relative: &str) -> Option<PathBuf> {
    Some(temp_dir.path().join(relative))
}
