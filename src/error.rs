//! Error type for surface construction and configuration loading.
//!
//! Rasterization entry points never fail: out-of-range pixels are skipped and
//! degenerate geometry is a no-op. Errors only arise when building a surface
//! or pattern from caller data, or when parsing a session configuration.

use thiserror::Error;

/// Errors raised while constructing surfaces or loading configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// A surface or pattern must have at least one pixel.
    #[error("surface must not be empty (got {width}x{height})")]
    ZeroSized { width: u32, height: u32 },

    /// The backing byte buffer cannot hold `height` rows at the given stride.
    #[error("pixel buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// Row stride shorter than one row of RGB pixels.
    #[error("stride {stride} is shorter than a {width}-pixel RGB row")]
    InvalidStride { stride: usize, width: u32 },

    /// Session configuration could not be parsed.
    #[cfg(feature = "config")]
    #[error("invalid session configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
