//! CLI command implementations

pub mod init;
pub mod play;
pub mod render;
pub mod session;
pub mod status;
pub mod tasks;
