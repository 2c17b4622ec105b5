pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ CalcEstateConfig, ConfigError };
pub use errors::{ CalcEstateError, CalcResult, ErrorSeverity, RecoverableError };
pub use implementations::{
    catalog,
    favorites::{ FavoritesStore, LIKED_RATIOS_KEY },
    file_storage::JsonFileStorage,
    formulas,
    formulas::{ evaluate, evaluate_all, try_evaluate },
    memory_storage::MemoryStorage,
    property_store::{ PropertyStore, PROPERTIES_KEY },
};
pub use models::{
    inputs::{ InputValue, RatioInputs },
    property::{ DataField, FieldType, Property, COLOR_PALETTE, DEFAULT_COLOR },
    ratio::{ Importance, RatioCategory, RatioDefinition, ResultRating, ResultUnit },
};
pub use traits::KeyValueStorage;
