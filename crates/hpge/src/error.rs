//! Error type shared by the profile builders, the query engine and the material engine.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or missing configuration fields (raised by the loading layer).
    #[error("invalid detector configuration: {0}")]
    InvalidConfig(String),

    /// Geometric query against a solid that exposes no revolution profile.
    #[error("{query} is not implemented for solid '{solid}'")]
    UnsupportedShape { query: &'static str, solid: String },

    /// Query points must carry exactly three coordinates.
    #[error("query points must have 3 components (x, y, z), got {got}")]
    DimensionMismatch { got: usize },

    /// Isotope fractions that do not form a valid mixture.
    #[error("invalid isotope mixture: {0}")]
    InvalidMixture(String),

    #[error("surface index {index} out of range for a profile with {edges} edges")]
    SurfaceIndexOutOfRange { index: usize, edges: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
