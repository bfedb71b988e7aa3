pub mod registry;
pub mod traits;

// Parser implementations
pub mod keyword;
