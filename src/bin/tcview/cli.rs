//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// tcview - inspect a Java toolchain the way build extensions see it
#[derive(Parser)]
#[command(name = "tcview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every `java_toolchain` field
    Show(ShowArgs),

    /// Read a single `java_toolchain` field
    Get(GetArgs),

    /// List the `java_toolchain` field names
    Fields,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where the toolchain comes from and how missing language levels are reported.
#[derive(Args)]
pub struct ToolchainSource {
    /// Toolchain description file (defaults to .tcview/toolchain.toml)
    #[arg(long, env = "TCVIEW_TOOLCHAIN")]
    pub toolchain: Option<PathBuf>,

    /// Version reported when javacopts carry no -source/-target
    #[arg(long)]
    pub default_version: Option<String>,

    /// Label of the analysis context
    #[arg(long)]
    pub label: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: ToolchainSource,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct GetArgs {
    /// Field name (e.g. source_version, jvm_opt)
    pub attr: String,

    #[command(flatten)]
    pub source: ToolchainSource,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
