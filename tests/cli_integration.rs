//! CLI integration tests for tcview.
//!
//! These tests run the binary against toolchain description files in a
//! temporary project. HOME points into the temporary directory so no user
//! configuration leaks in.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const TOOLCHAIN: &str = r#"
[java_toolchain]
javac = "third_party/java/jdk/langtools/javac.jar"
singlejar = "tools/jdk/singlejar_deploy.jar"
bootclasspath = [
    { path = "jdk/jre/lib/rt.jar", root = "source" },
    { path = "jdk/jre/lib/rt.jar", root = "source" },
]
jvm_opts = ["-Xmx1g", "-XX:+UseParallelGC", "-Xss4m"]
tools = ["tools/jdk/turbine_deploy.jar"]
javacopts = ["-target", "8", "-source", "7"]
"#;

/// Get the tcview binary command, isolated from the user's home directory.
fn tcview(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tcview").unwrap();
    cmd.env("HOME", home)
        .env_remove("JAVA_HOME")
        .env_remove("TCVIEW_TOOLCHAIN");
    cmd
}

/// Create a project with `.tcview/toolchain.toml`.
fn project(toolchain: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join(".tcview");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("toolchain.toml"), toolchain).unwrap();
    tmp
}

// ============================================================================
// tcview show
// ============================================================================

#[test]
fn test_show_prints_every_field() {
    let tmp = project(TOOLCHAIN);

    tcview(tmp.path())
        .args(["show", "--default-version", "11"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("source_version  \"7\""))
        .stdout(predicate::str::contains("target_version  \"8\""))
        .stdout(predicate::str::contains(
            "<derived file third_party/java/jdk/langtools/javac.jar>",
        ))
        .stdout(predicate::str::contains("bootclasspath"))
        .stdout(predicate::str::contains("tools"));
}

#[test]
fn test_show_json() {
    let tmp = project(TOOLCHAIN);

    let output = tcview(tmp.path())
        .args(["show", "--json", "--default-version", "11"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["source_version"], "7");
    assert_eq!(json["target_version"], "8");
    assert_eq!(json["single_jar"]["path"], "tools/jdk/singlejar_deploy.jar");
    assert_eq!(json["bootclasspath"].as_array().unwrap().len(), 1);
    assert_eq!(
        json["jvm_opt"],
        serde_json::json!(["-Xmx1g", "-XX:+UseParallelGC", "-Xss4m"])
    );
}

#[test]
fn test_show_without_toolchain_fails() {
    let tmp = TempDir::new().unwrap();

    tcview(tmp.path())
        .args(["show", "--default-version", "11", "--label", "//java/app"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no java toolchain is bound in `//java/app`",
        ));
}

#[test]
fn test_show_with_explicit_toolchain() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("jdk.toml");
    fs::write(&path, TOOLCHAIN).unwrap();

    tcview(tmp.path())
        .args(["show", "--default-version", "11", "--toolchain"])
        .arg(&path)
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("source_version  \"7\""));
}

#[test]
fn test_show_with_missing_explicit_toolchain() {
    let tmp = TempDir::new().unwrap();

    tcview(tmp.path())
        .args(["show", "--toolchain", "nope.toml"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read toolchain config"));
}

// ============================================================================
// tcview get
// ============================================================================

#[test]
fn test_get_jvm_opt_keeps_order() {
    let tmp = project(TOOLCHAIN);

    tcview(tmp.path())
        .args(["get", "jvm_opt", "--default-version", "11"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("-Xmx1g\n-XX:+UseParallelGC\n-Xss4m\n");
}

#[test]
fn test_get_falls_back_to_default_version() {
    let tmp = project(
        r#"
[java_toolchain]
javac = "javac.jar"
singlejar = "singlejar.jar"
javacopts = ["-g", "-source"]
"#,
    );

    tcview(tmp.path())
        .args(["get", "source_version", "--default-version", "1.8"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("1.8\n");
}

#[test]
fn test_get_default_version_from_config() {
    let tmp = project(
        r#"
[java_toolchain]
javac = "javac.jar"
singlejar = "singlejar.jar"
"#,
    );
    fs::write(
        tmp.path().join(".tcview").join("config.toml"),
        "[view]\ndefault_version = \"21\"\n",
    )
    .unwrap();

    tcview(tmp.path())
        .args(["get", "target_version"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("21\n");
}

#[test]
fn test_get_unknown_field() {
    let tmp = project(TOOLCHAIN);

    tcview(tmp.path())
        .args(["get", "javacopts", "--default-version", "11"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "has no field or method `javacopts`",
        ))
        .stderr(predicate::str::contains("tcview fields"));
}

#[test]
fn test_get_json_artifact() {
    let tmp = project(TOOLCHAIN);

    tcview(tmp.path())
        .args(["get", "javac_jar", "--json", "--default-version", "11"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"path\": \"third_party/java/jdk/langtools/javac.jar\"",
        ));
}

/// Lay out `<root>/<name>/bin/java` as an executable, with a `release` file
/// when given.
#[cfg(unix)]
fn fake_jdk(root: &Path, name: &str, release: Option<&str>) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let home = root.join(name);
    let java = home.join("bin").join("java");
    fs::create_dir_all(java.parent().unwrap()).unwrap();
    fs::write(&java, "#!/bin/sh\n").unwrap();
    fs::set_permissions(&java, fs::Permissions::from_mode(0o755)).unwrap();
    if let Some(release) = release {
        fs::write(home.join("release"), release).unwrap();
    }
    home
}

const BARE_TOOLCHAIN: &str = r#"
[java_toolchain]
javac = "javac.jar"
singlejar = "singlejar.jar"
"#;

#[cfg(unix)]
#[test]
fn test_get_default_version_from_path_jdk_when_java_home_is_stale() {
    let tmp = project(BARE_TOOLCHAIN);
    let stale = fake_jdk(tmp.path(), "stale", None);
    let jdk17 = fake_jdk(tmp.path(), "jdk17", Some("JAVA_VERSION=\"17.0.2\"\n"));

    tcview(tmp.path())
        .args(["get", "source_version"])
        .env("JAVA_HOME", &stale)
        .env("PATH", jdk17.join("bin"))
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("17\n");
}

#[cfg(unix)]
#[test]
fn test_get_default_version_from_java_home() {
    let tmp = project(BARE_TOOLCHAIN);
    let jdk8 = fake_jdk(tmp.path(), "jdk8", Some("JAVA_VERSION=\"1.8.0_392\"\n"));
    let jdk17 = fake_jdk(tmp.path(), "jdk17", Some("JAVA_VERSION=\"17.0.2\"\n"));

    tcview(tmp.path())
        .args(["get", "target_version"])
        .env("JAVA_HOME", &jdk8)
        .env("PATH", jdk17.join("bin"))
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("1.8\n");
}

#[test]
fn test_get_default_version_without_host_jdk() {
    let tmp = project(BARE_TOOLCHAIN);
    let empty_bin = tmp.path().join("empty-bin");
    fs::create_dir_all(&empty_bin).unwrap();

    tcview(tmp.path())
        .args(["get", "source_version"])
        .env("PATH", &empty_bin)
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("11\n");
}

// ============================================================================
// tcview fields
// ============================================================================

#[test]
fn test_fields_lists_all_attributes() {
    let tmp = TempDir::new().unwrap();

    let output = tcview(tmp.path()).arg("fields").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let fields: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        fields,
        [
            "java_toolchain.source_version",
            "java_toolchain.target_version",
            "java_toolchain.javac_jar",
            "java_toolchain.single_jar",
            "java_toolchain.bootclasspath",
            "java_toolchain.jvm_opt",
            "java_toolchain.tools",
        ]
    );
}
