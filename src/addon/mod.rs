pub mod config;
pub mod publish;
pub mod summary;
