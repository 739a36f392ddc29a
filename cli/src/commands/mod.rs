//! CLI command implementations

pub mod crush;
pub mod info;
pub mod init;
pub mod list;
pub mod scan;
pub mod search;
pub mod status;
