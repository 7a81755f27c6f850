pub mod dedup;
pub mod init;
pub mod sample;
pub mod validate;
