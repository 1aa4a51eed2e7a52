//! Project convention detection against real project trees.

mod common;

use common::project_tree;
use pretty_assertions::assert_eq;
use test_toggle::project::{Layout, TestStyle};
use test_toggle::ProjectConvention;

#[test]
fn test_rails_app_with_rspec() {
    let dir = project_tree(&["Gemfile", "app/models/user.rb", "spec/spec_helper.rb"]);
    let project = ProjectConvention::new(dir.path());

    assert_eq!(project.layout(), Layout::Application);
    assert_eq!(project.test_style(), TestStyle::Spec);
    assert_eq!(project.source_dirs(), vec!["app", "lib"]);
    assert_eq!(project.test_dirs(), vec!["spec", "spec/lib"]);
    assert_eq!(project.test_suffix(), "_spec.rb");
}

#[test]
fn test_gem_with_minitest() {
    let dir = project_tree(&["my_gem.gemspec", "lib/my_gem.rb", "test/test_helper.rb"]);
    let project = ProjectConvention::new(dir.path());

    assert_eq!(project.layout(), Layout::Library);
    assert_eq!(project.test_style(), TestStyle::Unit);
    assert_eq!(project.source_dirs(), vec!["lib", ""]);
    assert_eq!(project.test_dirs(), vec!["test", "test/lib"]);
    assert_eq!(project.test_matchers().len(), 2);
    assert_eq!(project.test_suffix(), "_test.rb");
}

#[test]
fn test_gemspec_in_subdirectory_is_not_a_gem() {
    let dir = project_tree(&["vendor/gems/other/other.gemspec"]);
    let project = ProjectConvention::new(dir.path());

    assert_eq!(project.layout(), Layout::Application);
}

#[test]
fn test_detection_is_idempotent() {
    let dir = project_tree(&["my_gem.gemspec", ".rspec"]);
    let project = ProjectConvention::new(dir.path());

    let first = (project.is_library_layout(), project.uses_spec_convention());
    let second = (project.is_library_layout(), project.uses_spec_convention());

    assert_eq!(first, second);
    assert_eq!(first, (true, true));
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_does_not_hide_spec_helper() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let dir = project_tree(&["locked/inner/notes.txt", "engines/admin/spec/spec_helper.rb"]);
    let locked = dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let project = ProjectConvention::new(dir.path());
    let style = project.test_style();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(style, TestStyle::Spec);
}

