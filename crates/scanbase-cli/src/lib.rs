#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod bootstrap;
pub mod cli;
pub mod handlers;

pub use bootstrap::{CliContext, bootstrap};
pub use cli::{Cli, Commands, WorkspaceCommand};
