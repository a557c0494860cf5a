//! Variables document and key-path types

mod document;
mod key_path;

pub use document::{KeyPathError, VariableValue, VariablesDocument};
pub use key_path::KeyPath;
