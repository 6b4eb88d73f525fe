//! Error taxonomy for the generation pipeline.
//!
//! Every error here is fatal: nothing is recovered locally, a failure aborts
//! the remainder of the run, and the caller surfaces it with a nonzero exit.
//! Reruns are the recovery mechanism; generation is idempotent.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by a [`Renderer`](crate::render::Renderer) implementation.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The vector markup could not be parsed.
    #[error("malformed vector markup: {0}")]
    Parse(String),

    /// A pixel buffer of the requested dimensions could not be allocated.
    #[error("cannot allocate {width}x{height} pixel buffer")]
    Allocate { width: u32, height: u32 },

    /// Encoding the rendered buffer to PNG failed.
    #[error("png encoding failed")]
    Encode(#[from] image::ImageError),
}

/// Fatal errors surfaced by the generation pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A platform identifier is not present in the registry.
    ///
    /// Raised while resolving the requested platforms, before any file is
    /// written for the invocation.
    #[error("unknown platform `{0}`")]
    UnknownPlatform(String),

    /// A destination directory could not be created.
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An asset file could not be written.
    #[error("failed to write {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rasterization capability failed for an asset.
    #[error("rasterization failed for {}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    /// A derived artifact could not be serialized.
    #[error("failed to serialize derived artifact")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_platform_names_the_identifier() {
        let err = GenerateError::UnknownPlatform("symbian".into());
        assert_eq!(err.to_string(), "unknown platform `symbian`");
    }

    #[test]
    fn io_errors_carry_the_failing_path() {
        let err = GenerateError::WriteFile {
            path: PathBuf::from("web/manifest.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("web/manifest.json"));
    }
}
