//! Error handling for RoomPlan
//!
//! Provides error types for the layers of the planner that can actually fail:
//! - Catalog errors (loading and looking up furniture definitions)
//! - Asset errors (resolving model dimensions)
//! - Scene file errors (reading and writing saved layouts)
//!
//! Placement validation never produces an error: an illegal transform is
//! simply not committed. All error types use `thiserror`.

use thiserror::Error;

/// Catalog error type
///
/// Represents errors raised while loading the static furniture catalog
/// or resolving a definition from it.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    /// No definition with this identifier exists
    #[error("Furniture definition not found: {id}")]
    DefinitionNotFound {
        /// The requested definition identifier.
        id: String,
    },

    /// Two definitions share an identifier
    #[error("Duplicate furniture definition: {id}")]
    DuplicateDefinition {
        /// The identifier that appears more than once.
        id: String,
    },

    /// A definition carries explicit dimensions that are not usable
    #[error("Invalid dimensions for {id}: {reason}")]
    InvalidDimensions {
        /// The offending definition identifier.
        id: String,
        /// Why the dimensions were rejected.
        reason: String,
    },

    /// The catalog document could not be parsed
    #[error("Malformed catalog: {reason}")]
    Malformed {
        /// The parser's explanation.
        reason: String,
    },
}

/// Asset error type
///
/// Represents failures of the asset/dimension collaborator. These are always
/// recovered locally by substituting the type-keyed default dimensions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    /// The asset is not known to the loader
    #[error("Asset not found: {asset_ref}")]
    NotFound {
        /// The asset reference that was requested.
        asset_ref: String,
    },

    /// The asset loaded but its geometry produced unusable dimensions
    #[error("Asset {asset_ref} has degenerate geometry")]
    DegenerateGeometry {
        /// The asset reference whose geometry was rejected.
        asset_ref: String,
    },

    /// The loader cannot fetch assets at all (offline, missing manifest)
    #[error("Asset loading unavailable: {reason}")]
    Unavailable {
        /// Why loading is unavailable.
        reason: String,
    },
}

/// Scene file error type
///
/// Represents errors while reading or writing a saved scene layout.
#[derive(Error, Debug, Clone)]
pub enum SceneFileError {
    /// The file was written by an incompatible format version
    #[error("Unsupported scene file version {found} (expected {expected})")]
    UnsupportedVersion {
        /// The version found in the file.
        found: String,
        /// The version this build understands.
        expected: String,
    },

    /// The file content is not a valid scene document
    #[error("Malformed scene file: {reason}")]
    Malformed {
        /// The parser's explanation.
        reason: String,
    },
}

/// Main error type for RoomPlan
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Asset error
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Scene file error
    #[error(transparent)]
    SceneFile(#[from] SceneFileError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a catalog error
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, Error::Catalog(_))
    }

    /// Check if this is an asset error
    pub fn is_asset_error(&self) -> bool {
        matches!(self, Error::Asset(_))
    }

    /// Check if this is a scene file error
    pub fn is_scene_file_error(&self) -> bool {
        matches!(self, Error::SceneFile(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
