pub mod calc;
pub mod field;
pub mod property;
pub mod ratios;
