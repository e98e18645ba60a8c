pub mod files;
pub mod root;
pub mod upload;
