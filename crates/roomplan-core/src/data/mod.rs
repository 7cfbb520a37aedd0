//! Static data models
//!
//! This module provides:
//! - Furniture definitions (immutable catalog templates)
//! - Room categories grouping those definitions
//! - The type-keyed default dimension table

pub mod catalog;

pub use catalog::{random_hex_color, Catalog, FurnitureDefinition, FurnitureType, RoomCategory};
