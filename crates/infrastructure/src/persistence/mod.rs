//! File system and repository adapters.

mod file_system;
mod variables_repository;

pub use file_system::TokioFileSystem;
pub use variables_repository::FileVariablesRepository;
