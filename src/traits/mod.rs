pub mod storage;

// Re-export traits
pub use storage::KeyValueStorage;
