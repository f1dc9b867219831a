//! High-level operations.
//!
//! This module contains the implementation of tcview commands.

pub mod inspect;

pub use inspect::{
    get_attr, inspect, load_provider, resolve_default_version, rule_context, InspectOptions,
    ToolchainReport,
};
