//! CLI command implementations
//!
//! Every command returns its process exit code.

pub mod check;
pub mod init;
pub mod validate;
