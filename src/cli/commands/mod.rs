//! CLI command implementations
//!
//! Every command returns a process exit code:
//!
//! - `0` success
//! - `1` export finished with per-item failures and `--strict` was given
//! - `2` configuration error
//! - `5` fatal error

pub mod export;
pub mod init;
pub mod validate;
