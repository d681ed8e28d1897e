//! Package manager detection and delegated command execution
//!
//! This module provides:
//! - Package manager detection from the `npm_config_user_agent` string
//! - Delegating command synthesis and a child-process runner

pub mod command;
pub mod package_manager;

pub use command::{synthesize, CommandRunner, ProcessRunner, SynthesizedCommand};
pub use package_manager::PackageManagerInfo;
