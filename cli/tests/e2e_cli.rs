//! End-to-end CLI tests for readywrite.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn readywrite() -> Command {
    cargo_bin_cmd!("readywrite")
}

/// Write the shipped catalog in `format` into `dir` and return its path.
fn export_catalog(dir: &TempDir, format: &str) -> std::path::PathBuf {
    let output = readywrite()
        .args(["catalog", "--format", format])
        .output()
        .expect("run catalog export");
    assert!(output.status.success());

    let path = dir.path().join(format!("catalog.{format}"));
    fs::write(&path, output.stdout).expect("write catalog");
    path
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        readywrite()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("catalog"));
    }

    #[test]
    fn shows_version() {
        readywrite()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        readywrite().arg("publish").assert().failure();
    }
}

mod render {
    use super::*;

    #[test]
    fn writes_page_with_pinned_year() {
        let dir = TempDir::new().expect("tempdir");
        let out = dir.path().join("site/index.html");

        readywrite()
            .args(["render", "--year", "2030", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote"));

        let html = fs::read_to_string(&out).expect("page written");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("© 2030 ReadyWrite. All rights reserved."));
        assert!(html.contains(r#"id="pricing""#));
    }

    #[test]
    fn renders_to_stdout() {
        readywrite()
            .args(["render", "--year", "2030", "--out", "-"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("Most popular"));
    }

    #[test]
    fn refuses_invalid_catalog() {
        let dir = TempDir::new().expect("tempdir");
        let path = export_catalog(&dir, "json");

        let mut catalog: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
        for tier in catalog["pricing"].as_array_mut().expect("pricing array") {
            tier["highlighted"] = serde_json::Value::Bool(true);
        }
        fs::write(&path, catalog.to_string()).expect("write");

        let out = dir.path().join("index.html");
        readywrite()
            .args(["render", "--catalog"])
            .arg(&path)
            .arg("--out")
            .arg(&out)
            .assert()
            .failure()
            .stderr(predicate::str::contains("catalog is invalid"));
        assert!(!out.exists());
    }

    #[test]
    fn reports_missing_catalog_file() {
        readywrite()
            .args(["render", "--catalog", "does/not/exist.toml", "--out", "-"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("could not load catalog"));
    }
}

mod catalog {
    use super::*;

    #[test]
    fn check_passes_for_shipped_catalog() {
        readywrite()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("Catalog OK: ReadyWrite"))
            .stdout(predicate::str::contains("featured: Pro"));
    }

    #[test]
    fn exported_toml_loads_back() {
        let dir = TempDir::new().expect("tempdir");
        let path = export_catalog(&dir, "toml");

        readywrite()
            .args(["check", "--catalog"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Catalog OK"));
    }

    #[test]
    fn exported_json_loads_back() {
        let dir = TempDir::new().expect("tempdir");
        let path = export_catalog(&dir, "json");

        readywrite()
            .args(["check", "--catalog"])
            .arg(&path)
            .assert()
            .success();
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("catalog.yaml");
        fs::write(&path, "brand: {}").expect("write");

        readywrite()
            .args(["check", "--catalog"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("unsupported catalog format"));
    }
}
