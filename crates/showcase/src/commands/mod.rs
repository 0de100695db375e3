pub mod config;
pub mod index;
pub mod init;
pub mod preview;
