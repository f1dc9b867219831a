//! Host Java detection.
//!
//! The default language level reported by the view is the specification
//! version of the host JDK when one can be found. Detection order:
//! 1. `JAVA_HOME/release`
//! 2. The `release` file of the JDK owning the `java` executable on PATH
//! 3. [`DEFAULT_JAVA_VERSION`]

use std::path::{Path, PathBuf};

use crate::util::process::find_executable;

/// Specification version used when no host JDK can be inspected.
pub const DEFAULT_JAVA_VERSION: &str = "11";

/// Detect the host Java specification version, falling back to
/// [`DEFAULT_JAVA_VERSION`].
pub fn java_specification_version() -> String {
    let java_home = std::env::var_os("JAVA_HOME").map(PathBuf::from);

    host_java_version(java_home.as_deref(), || find_executable("java")).unwrap_or_else(|| {
        tracing::debug!(
            "no host JDK found, using default Java version {}",
            DEFAULT_JAVA_VERSION
        );
        DEFAULT_JAVA_VERSION.to_string()
    })
}

/// Specification version of the host JDK.
///
/// `java_home` is tried first. If it has no readable `release` file, the JDK
/// owning the launcher returned by `path_java` is tried instead.
pub fn host_java_version(
    java_home: Option<&Path>,
    path_java: impl FnOnce() -> Option<PathBuf>,
) -> Option<String> {
    if let Some(home) = java_home {
        if let Some(version) = read_release_version(home) {
            return Some(version);
        }
        tracing::debug!("JAVA_HOME={} has no usable release file", home.display());
    }

    let home = jdk_home_of(&path_java()?)?;
    read_release_version(&home)
}

/// The JDK home a `java` launcher belongs to (`<home>/bin/java`).
///
/// Symlinks are followed, so `/usr/bin/java` resolves to the real JDK.
pub fn jdk_home_of(java: &Path) -> Option<PathBuf> {
    let java = java.canonicalize().unwrap_or_else(|_| java.to_path_buf());
    Some(java.parent()?.parent()?.to_path_buf())
}

/// Read the specification version from `<home>/release`.
pub fn read_release_version(home: &Path) -> Option<String> {
    let path = home.join("release");
    let contents = std::fs::read_to_string(&path).ok()?;
    let version = parse_release_file(&contents)?;
    tracing::debug!("host JDK at {} is Java {}", home.display(), version);
    Some(version)
}

/// Extract the specification version from the contents of a JDK `release` file.
pub fn parse_release_file(contents: &str) -> Option<String> {
    contents
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == "JAVA_VERSION")
        .and_then(|(_, value)| specification_version(value.trim().trim_matches('"')))
}

/// Reduce a full Java version to its specification version.
///
/// Versions before 9 keep the `1.x` form (`1.8.0_292` is `1.8`); later
/// versions are the feature number (`17.0.2` is `17`).
pub fn specification_version(version: &str) -> Option<String> {
    let mut parts = version.split(|c: char| c == '.' || c == '_' || c == '+' || c == '-');
    let first = parts.next().filter(|p| !p.is_empty())?;
    if !first.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    if first == "1" {
        let minor = parts.next().filter(|p| p.chars().all(|c| c.is_ascii_digit()))?;
        if minor.is_empty() {
            return None;
        }
        Some(format!("1.{}", minor))
    } else {
        Some(first.to_string())
    }
}
