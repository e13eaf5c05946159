pub mod init;
pub mod pathways;
pub mod score;
pub mod validate;
