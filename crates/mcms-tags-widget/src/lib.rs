pub mod attrs;
pub mod transform;

// Re-export the types that users need
pub use attrs::{
    tag_input_attrs, AttrValue, InputConfig, MEDIA_CSS, MEDIA_JS, PROVIDES, TEMPLATE_NAME,
};
pub use transform::{apply_input_attributes, TransformError};

/// Build the tag input attribute set and apply it to rendered form markup
pub fn render_input(
    html: &str,
    config: Option<&InputConfig>,
    extra: &[(String, AttrValue)],
) -> Result<String, TransformError> {
    transform::apply_input_attributes(html, &attrs::tag_input_attrs(config, extra))
}
