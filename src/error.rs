//! Error types for the conversion pipeline.

/// Errors surfaced by `convert` and the renderers.
///
/// The converter performs no internal retries and swallows nothing: every
/// failure propagates synchronously to the caller, and no partial ASCII
/// output is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Source bytes are not a valid/decodable image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// URL source could not be fetched.
    #[error("failed to fetch image from '{url}': {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Malformed conversion options (zero width, bad contrast/gamma).
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// PNG re-rasterization failed to encode.
    #[error("failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    /// Nothing to rasterize (empty ASCII text).
    #[error("cannot render PNG: {0}")]
    Render(String),
}
