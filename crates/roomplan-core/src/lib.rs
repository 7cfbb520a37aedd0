//! # RoomPlan Core
//!
//! Core types and utilities shared by the RoomPlan crates.
//! Provides the floor-plane geometry value types, the furniture catalog,
//! the error taxonomy, and the notification sink used to surface
//! user-visible outcomes.

pub mod data;
pub mod error;
pub mod geometry;
pub mod notification;
pub mod types;

pub use data::{Catalog, FurnitureDefinition, FurnitureType, RoomCategory};

pub use error::{AssetError, CatalogError, Error, Result, SceneFileError};

pub use geometry::{Dimensions, EulerRotation, Point3, RoomBoundary, Scale3};

pub use notification::{Notification, NotificationCenter, NotificationSink, Severity};

pub use types::ItemId;
