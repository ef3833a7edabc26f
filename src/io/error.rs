//! Error types for shred matching and image I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all unshredding operations
#[derive(Debug)]
pub enum UnshredError {
    /// Failed to decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode or write the reconstructed image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The command-line target is neither a readable image nor a directory
    InvalidTarget {
        /// Offending path
        path: PathBuf,
        /// Why the target was rejected
        reason: &'static str,
    },

    /// Shred width must be at least one pixel
    InvalidShredWidth {
        /// Requested width in pixels
        width: usize,
    },

    /// The image does not split into enough shreds to order
    TooFewShreds {
        /// Source image width in pixels
        image_width: usize,
        /// Requested shred width in pixels
        shred_width: usize,
        /// Number of whole shreds that fit
        shreds: usize,
    },

    /// Neighbor resolution found neither a left nor a right photo edge
    UnresolvedEdge {
        /// Number of shreds that were compared
        shreds: usize,
    },

    /// The chain walk stopped before every shred was placed
    ///
    /// Only raised in strict mode; otherwise the partial order is written.
    BrokenChain {
        /// Number of shreds in the image
        expected: usize,
        /// Number of shreds the walk placed
        found: usize,
    },
}

impl fmt::Display for UnshredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(
                    f,
                    "Failed to load image '{}': {source} (is it a valid image file?)",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
            }
            Self::InvalidShredWidth { width } => {
                write!(f, "Invalid shred width {width}: must be at least 1 pixel")
            }
            Self::TooFewShreds {
                image_width,
                shred_width,
                shreds,
            } => {
                write!(
                    f,
                    "Image width {image_width} holds {shreds} shred(s) of width {shred_width}, at least 2 are needed"
                )
            }
            Self::UnresolvedEdge { shreds } => {
                write!(
                    f,
                    "Could not identify a left or right photo edge among {shreds} shreds"
                )
            }
            Self::BrokenChain { expected, found } => {
                write!(
                    f,
                    "Neighbor chain broke after placing {found} of {expected} shreds"
                )
            }
        }
    }
}

impl std::error::Error for UnshredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for unshredding results
pub type Result<T> = std::result::Result<T, UnshredError>;

impl UnshredError {
    /// True for errors raised before any image data is examined
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidShredWidth { .. } | Self::TooFewShreds { .. }
        )
    }

    /// Process exit status: 2 for configuration errors, like a usage error, 1 otherwise
    pub const fn exit_status(&self) -> u8 {
        if self.is_configuration() { 2 } else { 1 }
    }
}

/// Attach a path and operation name to a raw I/O error
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> UnshredError {
    let path = path.into();
    move |source| UnshredError::FileSystem {
        path,
        operation,
        source,
    }
}
