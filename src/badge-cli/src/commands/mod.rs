//! Command handlers for badge CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod batch;
pub mod configure;
pub mod convert;
pub mod hid;
