pub mod catalog;
pub mod favorites;
pub mod file_storage;
pub mod formulas;
pub mod memory_storage;
pub mod property_store;
