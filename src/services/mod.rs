// Service exports
pub mod directory;

pub use directory::{DirectoryError, ProviderDirectory};
