//! Workspace store and registry integration tests
//!
//! Exercise load/mutate/persist cycles against a real file the way a single
//! CLI invocation does.

mod common;

use common::assertion_helpers::assert_unchanged;
use common::test_fixtures::WorkspaceFixture;
use common::test_helpers::TestStore;
use pretty_assertions::assert_eq;
use std::fs;
use wkm::application::services::{CreateProjectOutcome, ProjectRegistry, RepositoryRegistry};
use wkm::domain::entities::{Repository, Workspace};
use wkm::infrastructure::filesystem::{StoreConfig, WorkspaceStore};
use wkm::WkmError;

#[test]
fn test_load_is_idempotent() {
    let test_store = TestStore::new();
    assert_file_not_exists!(test_store.file());

    let first = test_store.load();
    assert_file_exists!(test_store.file());
    let bytes_after_first = test_store.raw();

    let second = test_store.load();
    assert_eq!(first, Workspace::new());
    assert_eq!(second, first);
    assert_unchanged(&bytes_after_first, &test_store.raw());
}

#[test]
fn test_round_trip_preserves_workspace() {
    let test_store = TestStore::new();
    let workspace = WorkspaceFixture::multi_project();

    test_store.store().persist(&workspace).unwrap();
    assert_eq!(test_store.load(), workspace);
}

#[test]
fn test_store_config_uses_explicit_directory() {
    let test_store = TestStore::new();
    let config = StoreConfig::new(Some(test_store.path().to_path_buf()));
    let store = WorkspaceStore::from_config(&config).unwrap();

    assert_eq!(store.path(), test_store.file().as_path());
}

#[test]
fn test_create_project_twice_keeps_repositories() {
    let test_store = TestStore::new();
    let store = test_store.store();

    let mut workspace = store.load().unwrap();
    assert_eq!(
        ProjectRegistry::new(&mut workspace).create("X"),
        CreateProjectOutcome::Created
    );
    RepositoryRegistry::for_active_project(&mut workspace)
        .unwrap()
        .create("r", Some("/p/r".to_string()))
        .unwrap();
    store.persist(&workspace).unwrap();

    let mut workspace = store.load().unwrap();
    assert_eq!(
        ProjectRegistry::new(&mut workspace).create("X"),
        CreateProjectOutcome::AlreadyExists
    );

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.projects.len(), 1);
    assert_eq!(reloaded.projects[0].repos, vec![Repository::new("r", "/p/r")]);
    assert_eq!(reloaded.active_project_name(), Some("X"));
}

#[test]
fn test_repository_operations_require_active_project() {
    for workspace in [
        WorkspaceFixture::without_active_project(),
        WorkspaceFixture::dangling_active_project(),
    ] {
        let test_store = TestStore::with_workspace(&workspace);
        let before = test_store.raw();

        let mut loaded = test_store.load();
        let result = RepositoryRegistry::for_active_project(&mut loaded);
        assert!(matches!(result, Err(WkmError::NoActiveProject)));

        assert_unchanged(&before, &test_store.raw());
    }
}

#[test]
fn test_lookup_in_active_project() {
    let mut workspace = WorkspaceFixture::web_project();
    let registry = RepositoryRegistry::for_active_project(&mut workspace).unwrap();

    assert_eq!(registry.resolve_path("b").unwrap(), "/p/b");
    assert!(matches!(
        registry.resolve_path("z"),
        Err(WkmError::RepositoryNotFound { .. })
    ));
}

#[test]
fn test_hand_edited_store_with_duplicates_loads() {
    let test_store = TestStore::new();
    fs::write(
        test_store.file(),
        r#"{
  "projects": [
    { "name": "web", "repos": [ { "name": "a", "path": "/first" } ] },
    { "name": "web", "repos": [ { "name": "a", "path": "/second" } ] }
  ],
  "config": { "project": "web", "theme": "dark" }
}"#,
    )
    .unwrap();

    let mut workspace = test_store.load();
    let registry = RepositoryRegistry::for_active_project(&mut workspace).unwrap();
    assert_eq!(registry.resolve_path("a").unwrap(), "/first");
}

#[test]
fn test_corrupt_store_is_reported() {
    let test_store = TestStore::new();
    fs::write(test_store.file(), "").unwrap();

    let result = test_store.store().load();
    assert!(matches!(result, Err(WkmError::CorruptStore { .. })));
}
