//! Integration tests for reading `skaffold.yaml` files from disk.

use pretty_assertions::assert_eq;
use skaffold_core::{CoreError, ProjectConfig, VersionedConfig};

#[test]
fn loads_every_document_of_a_multi_config_file() {
    let dir = tempfile::TempDir::new().expect("tmp dir");
    let path = dir.path().join("skaffold.yaml");
    std::fs::write(
        &path,
        r"apiVersion: skaffold/v2beta20
kind: Config
metadata:
  name: backend
---
apiVersion: skaffold/v2beta21
kind: Config
metadata:
  name: frontend
",
    )
    .expect("write");

    let configs = ProjectConfig::load_all(&path).expect("should load");
    let versions: Vec<&str> = configs.iter().map(VersionedConfig::version).collect();
    assert_eq!(versions, vec!["skaffold/v2beta20", "skaffold/v2beta21"]);
    assert_eq!(configs[1].metadata.name, "frontend");
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::TempDir::new().expect("tmp dir");
    let path = dir.path().join("absent.yaml");

    let err = ProjectConfig::load_all(&path).expect_err("should fail");
    assert!(matches!(err, CoreError::Io { .. }));
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn blank_documents_between_configs_are_skipped() {
    let dir = tempfile::TempDir::new().expect("tmp dir");
    let path = dir.path().join("skaffold.yaml");
    std::fs::write(
        &path,
        "# generated by skaffold init\n---\napiVersion: skaffold/v2beta21\nkind: Config\n---\n",
    )
    .expect("write");

    let configs = ProjectConfig::load_all(&path).expect("should load");
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].version(), "skaffold/v2beta21");
}
