//! CLI integration tests for slipway.
//!
//! These tests verify the full CLI surface, in particular the
//! `BUILD_SYSTEM` toggle scenarios: unset, `bazel`, and unrecognized.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the slipway binary command with a clean toggle environment.
fn slipway() -> Command {
    let mut cmd = Command::cargo_bin("slipway").unwrap();
    cmd.env_remove("BUILD_SYSTEM");
    cmd
}

/// Create a temporary directory for emit roots.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

// ============================================================================
// slipway generators
// ============================================================================

#[test]
fn test_generators_default_to_cmake_pair() {
    slipway()
        .args(["generators"])
        .assert()
        .success()
        .stdout("CMakeToolchain\nCMakeDeps\n");
}

#[test]
fn test_generators_toggle_bazel_selects_bazel_pair() {
    slipway()
        .args(["generators"])
        .env("BUILD_SYSTEM", "bazel")
        .assert()
        .success()
        .stdout("BazelToolchain\nBazelDeps\n");
}

#[test]
fn test_generators_unrecognized_toggle_falls_back_to_cmake() {
    slipway()
        .args(["generators"])
        .env("BUILD_SYSTEM", "xyz")
        .assert()
        .success()
        .stdout("CMakeToolchain\nCMakeDeps\n");
}

#[test]
fn test_generators_toggle_is_case_sensitive() {
    slipway()
        .args(["generators"])
        .env("BUILD_SYSTEM", "Bazel")
        .assert()
        .success()
        .stdout("CMakeToolchain\nCMakeDeps\n");
}

#[test]
fn test_generators_flag_overrides_toggle() {
    slipway()
        .args(["generators", "--build-system", "bazel"])
        .env("BUILD_SYSTEM", "cmake")
        .assert()
        .success()
        .stdout("BazelToolchain\nBazelDeps\n");
}

#[test]
fn test_generators_flag_rejects_unknown_value() {
    slipway()
        .args(["generators", "--build-system", "ninja"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid build system"));
}

// ============================================================================
// slipway inspect
// ============================================================================

#[test]
fn test_inspect_human_output() {
    slipway()
        .args(["inspect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe: cpp_template"))
        .stdout(predicate::str::contains("Version:       1.0.0"))
        .stdout(predicate::str::contains("Requires: (none)"))
        .stdout(predicate::str::contains("Default options: (none)"));
}

#[test]
fn test_inspect_json_output() {
    let output = slipway().args(["inspect", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "cpp_template");
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["build_system"], "cmake");
    assert_eq!(
        json["settings"],
        serde_json::json!(["os", "compiler", "build_type", "arch"])
    );
    assert_eq!(
        json["generators"],
        serde_json::json!(["CMakeToolchain", "CMakeDeps"])
    );
    assert_eq!(json["requires"], serde_json::json!([]));
    assert_eq!(json["default_options"], serde_json::json!({}));
    assert_eq!(json["folders"]["source"], ".");
    assert_eq!(json["folders"]["build"], "build");
}

#[test]
fn test_inspect_json_honors_toggle() {
    let output = slipway()
        .args(["inspect", "--json"])
        .env("BUILD_SYSTEM", "bazel")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["build_system"], "bazel");
    assert_eq!(
        json["generators"],
        serde_json::json!(["BazelToolchain", "BazelDeps"])
    );
}

// ============================================================================
// slipway layout
// ============================================================================

#[test]
fn test_layout_prints_fixed_folders() {
    slipway()
        .args(["layout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source folder: ."))
        .stdout(predicate::str::contains("Build folder:  build"));
}

#[test]
fn test_layout_ignores_toggle() {
    slipway()
        .args(["layout"])
        .env("BUILD_SYSTEM", "bazel")
        .assert()
        .success()
        .stdout(predicate::str::contains("Source folder: ."))
        .stdout(predicate::str::contains("Build folder:  build"));
}

// ============================================================================
// slipway emit
// ============================================================================

#[test]
fn test_emit_writes_recipe_json() {
    let tmp = temp_dir();

    slipway()
        .args(["emit", "--root"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote "));

    let path = tmp.path().join("build").join("recipe.json");
    assert!(path.exists());

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(json["name"], "cpp_template");
    assert_eq!(
        json["generators"],
        serde_json::json!(["CMakeToolchain", "CMakeDeps"])
    );
}

#[test]
fn test_emit_honors_toggle() {
    let tmp = temp_dir();

    slipway()
        .args(["emit", "--root"])
        .arg(tmp.path())
        .env("BUILD_SYSTEM", "bazel")
        .assert()
        .success();

    let path = tmp.path().join("build").join("recipe.json");
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(json["build_system"], "bazel");
}

#[test]
fn test_emit_toml_format() {
    let tmp = temp_dir();

    slipway()
        .args(["emit", "--format", "toml", "--root"])
        .arg(tmp.path())
        .assert()
        .success();

    let path = tmp.path().join("build").join("recipe.toml");
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("name = \"cpp_template\""));
    assert!(contents.contains("CMakeToolchain"));
}

#[test]
fn test_emit_rejects_unknown_format() {
    let tmp = temp_dir();

    slipway()
        .args(["emit", "--format", "yaml", "--root"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid format"));
}

// ============================================================================
// slipway build
// ============================================================================

#[test]
fn test_build_is_a_noop() {
    slipway()
        .args(["build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no-op"))
        .stdout(predicate::str::contains("cmake"));
}

#[test]
fn test_build_defers_to_selected_build_system() {
    slipway()
        .args(["build"])
        .env("BUILD_SYSTEM", "bazel")
        .assert()
        .success()
        .stdout(predicate::str::contains("bazel"));
}

// ============================================================================
// slipway completions
// ============================================================================

#[test]
fn test_completions_bash() {
    slipway()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slipway"));
}
