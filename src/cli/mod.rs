pub mod format;
pub mod init;
pub mod scan;
pub mod validate;
