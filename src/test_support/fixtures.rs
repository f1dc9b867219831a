//! Pre-built toolchain providers and description files.

use crate::core::artifact::Artifact;
use crate::core::provider::JavaToolchainProvider;

/// A provider resembling a JDK 8 toolchain.
///
/// The bootclasspath contains a duplicate entry on purpose; the provider is
/// expected to drop it.
pub fn sample_provider() -> JavaToolchainProvider {
    JavaToolchainProvider::builder(
        Artifact::derived("third_party/java/jdk/langtools/javac.jar"),
        Artifact::derived("tools/jdk/singlejar_deploy.jar"),
    )
    .bootclasspath([
        Artifact::source("third_party/java/jdk/jre/lib/rt.jar"),
        Artifact::source("third_party/java/jdk/jre/lib/jsse.jar"),
        Artifact::source("third_party/java/jdk/jre/lib/rt.jar"),
    ])
    .jvm_options(["-Xmx1g", "-XX:+UseParallelGC", "-Xss4m"])
    .tools([
        Artifact::derived("tools/jdk/turbine_deploy.jar"),
        Artifact::derived("tools/jdk/ijar"),
    ])
    .javac_options(["-source", "8", "-target", "8", "-encoding", "UTF-8"])
    .build()
}

/// A minimal provider carrying only the given javac flags.
pub fn provider_with_javacopts(
    javacopts: impl IntoIterator<Item = impl Into<String>>,
) -> JavaToolchainProvider {
    JavaToolchainProvider::builder(
        Artifact::derived("javac.jar"),
        Artifact::derived("singlejar.jar"),
    )
    .javac_options(javacopts)
    .build()
}

/// A `toolchain.toml` describing [`sample_provider`].
pub const SAMPLE_TOOLCHAIN_TOML: &str = r#"
[java_toolchain]
javac = "third_party/java/jdk/langtools/javac.jar"
singlejar = "tools/jdk/singlejar_deploy.jar"
bootclasspath = [
    { path = "third_party/java/jdk/jre/lib/rt.jar", root = "source" },
    { path = "third_party/java/jdk/jre/lib/jsse.jar", root = "source" },
    { path = "third_party/java/jdk/jre/lib/rt.jar", root = "source" },
]
jvm_opts = ["-Xmx1g", "-XX:+UseParallelGC", "-Xss4m"]
tools = ["tools/jdk/turbine_deploy.jar", "tools/jdk/ijar"]
javacopts = ["-source", "8", "-target", "8", "-encoding", "UTF-8"]
"#;
