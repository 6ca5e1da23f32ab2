//! CLI command implementations.
//!
//! - **run**: run one demonstration or all of them
//! - **list**: print the available demonstrations
//! - **init**: write a default configuration file

pub mod init;
pub mod list;
pub mod run;
