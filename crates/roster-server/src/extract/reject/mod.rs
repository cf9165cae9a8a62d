//! Enhanced request extractors with improved error handling and validation.
//!
//! Drop-in replacements for the standard axum extractors that reject
//! malformed input with the uniform failure envelope instead of axum's
//! plain-text defaults.

pub mod enhanced_json;
pub mod enhanced_path;
pub mod enhanced_query;
pub mod validated_json;

pub use self::enhanced_json::Json;
pub use self::enhanced_path::Path;
pub use self::enhanced_query::Query;
pub use self::validated_json::ValidateJson;
