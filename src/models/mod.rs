pub mod inputs;
pub mod property;
pub mod ratio;

// Re-export common model types
pub use inputs::{ InputValue, RatioInputs };
pub use property::{ DataField, FieldType, Property, COLOR_PALETTE, DEFAULT_COLOR };
pub use ratio::{ Importance, RatioCategory, RatioDefinition, ResultRating, ResultUnit };
