//! Furniture catalog
//!
//! Definitions are loaded once from static configuration and never mutated.
//! Placed items copy the definition they were created from.

use crate::error::{CatalogError, Error, Result};
use crate::geometry::Dimensions;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use uuid::Uuid;

/// Furniture type tag; selects the fallback primitive and default dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureType {
    Chair,
    Table,
    Sofa,
    Bed,
    Cabinet,
    Desk,
}

impl FurnitureType {
    /// Get all furniture types
    pub fn all() -> &'static [FurnitureType] {
        &[
            FurnitureType::Chair,
            FurnitureType::Table,
            FurnitureType::Sofa,
            FurnitureType::Bed,
            FurnitureType::Cabinet,
            FurnitureType::Desk,
        ]
    }

    /// Default dimensions for this type.
    pub fn default_dimensions(self) -> Dimensions {
        match self {
            FurnitureType::Chair => Dimensions::new(0.6, 0.8, 0.6),
            FurnitureType::Table => Dimensions::new(1.2, 0.8, 0.8),
            FurnitureType::Sofa => Dimensions::new(2.0, 0.8, 0.9),
            FurnitureType::Bed => Dimensions::new(1.6, 0.6, 2.0),
            FurnitureType::Cabinet => Dimensions::new(1.0, 2.0, 0.5),
            FurnitureType::Desk => Dimensions::new(1.5, 0.75, 0.8),
        }
    }

    /// Default dimensions for an optional type tag; untyped items are a unit cube.
    pub fn defaults_for(kind: Option<FurnitureType>) -> Dimensions {
        kind.map(Self::default_dimensions)
            .unwrap_or_else(Dimensions::unit)
    }
}

impl fmt::Display for FurnitureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FurnitureType::Chair => write!(f, "chair"),
            FurnitureType::Table => write!(f, "table"),
            FurnitureType::Sofa => write!(f, "sofa"),
            FurnitureType::Bed => write!(f, "bed"),
            FurnitureType::Cabinet => write!(f, "cabinet"),
            FurnitureType::Desk => write!(f, "desk"),
        }
    }
}

/// Catalog entry: an immutable furniture template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureDefinition {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_id: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FurnitureType>,
    /// External model identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Base color as `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Explicit dimensions; when absent they are derived from the asset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

impl FurnitureDefinition {
    /// Create a bare definition with only the required fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            category_id: category_id.into(),
            kind: None,
            asset_ref: None,
            image_ref: None,
            color: None,
            dimensions: None,
        }
    }

    pub fn with_kind(mut self, kind: FurnitureType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_asset(mut self, asset_ref: impl Into<String>) -> Self {
        self.asset_ref = Some(asset_ref.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Dimensions from the type-keyed default table.
    pub fn default_dimensions(&self) -> Dimensions {
        FurnitureType::defaults_for(self.kind)
    }
}

/// A group of definitions offered together (bedroom, living room, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomCategory {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub furniture: Vec<FurnitureDefinition>,
}

/// The full furniture catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<RoomCategory>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog shipped with the application.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                RoomCategory {
                    id: "bedroom".to_string(),
                    name: "Bedroom".to_string(),
                    image_url: None,
                    furniture: vec![
                        FurnitureDefinition::new("bed-1", "Modern Bed", "bedroom")
                            .with_kind(FurnitureType::Bed)
                            .with_asset("/models/bed.glb"),
                        FurnitureDefinition::new("wardrobe-1", "Wardrobe", "bedroom")
                            .with_kind(FurnitureType::Cabinet)
                            .with_asset("/models/wardrobe.glb"),
                        FurnitureDefinition::new("desk-1", "Writing Desk", "bedroom")
                            .with_kind(FurnitureType::Desk),
                    ],
                },
                RoomCategory {
                    id: "livingRoom".to_string(),
                    name: "Living Room".to_string(),
                    image_url: None,
                    furniture: vec![
                        FurnitureDefinition::new("fridge-1", "Fridge", "kitchen")
                            .with_asset("/models/fridge.glb"),
                        FurnitureDefinition::new("sofa-1", "Sofa", "livingRoom")
                            .with_kind(FurnitureType::Sofa),
                        FurnitureDefinition::new("table-1", "Coffee Table", "livingRoom")
                            .with_kind(FurnitureType::Table),
                        FurnitureDefinition::new("chair-1", "Armchair", "livingRoom")
                            .with_kind(FurnitureType::Chair),
                    ],
                },
            ],
        }
    }

    /// Parse a catalog from JSON and check it.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json).map_err(|e| CatalogError::Malformed {
            reason: e.to_string(),
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            "Loaded catalog from {} ({} definitions)",
            path.as_ref().display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Check definition ids are unique and explicit dimensions are usable.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for def in self.definitions() {
            if !seen.insert(def.id.as_str()) {
                return Err(Error::Catalog(CatalogError::DuplicateDefinition {
                    id: def.id.clone(),
                }));
            }
            if let Some(dims) = def.dimensions {
                if !dims.is_valid() {
                    return Err(Error::Catalog(CatalogError::InvalidDimensions {
                        id: def.id.clone(),
                        reason: format!("{} is not positive and finite", dims),
                    }));
                }
            }
        }
        Ok(())
    }

    /// Iterate over every definition in category order.
    pub fn definitions(&self) -> impl Iterator<Item = &FurnitureDefinition> {
        self.categories.iter().flat_map(|c| c.furniture.iter())
    }

    /// Find a definition by id.
    pub fn find(&self, id: &str) -> Option<&FurnitureDefinition> {
        self.definitions().find(|d| d.id == id)
    }

    /// Find a definition by id, failing with a catalog error.
    pub fn get(&self, id: &str) -> Result<&FurnitureDefinition> {
        self.find(id).ok_or_else(|| {
            Error::Catalog(CatalogError::DefinitionNotFound { id: id.to_string() })
        })
    }

    pub fn category(&self, id: &str) -> Option<&RoomCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.definitions().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Random `#rrggbb` color for items that have neither an asset nor a color.
pub fn random_hex_color() -> String {
    let bytes = Uuid::new_v4();
    let b = bytes.as_bytes();
    format!("#{:02x}{:02x}{:02x}", b[0], b[1], b[2])
}
