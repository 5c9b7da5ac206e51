use serde_json::Value;

pub mod api;
pub mod codec;
pub mod config;
pub mod error;
pub mod field;
pub mod pyjson;

// Re-export the types that users need
pub use config::TagConfig;
pub use error::FieldError;
pub use field::TagsField;

/// Decode a raw tag value into the canonical tag list
pub fn decode_tags(raw: Option<&Value>) -> Vec<String> {
    codec::decode(raw)
}

/// Encode a stored tag value into the text the widget displays
pub fn encode_tags(value: Option<&Value>) -> String {
    codec::encode(value)
}
