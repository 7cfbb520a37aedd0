//! # RoomPlan Designer
//!
//! This crate keeps furniture layouts legal. It decides whether an item may
//! stand at a given spot, finds a free spot when the default one is taken,
//! and owns the scene that pointer gestures mutate.
//!
//! ## Core Components
//!
//! ### Placement
//! - **Bounding boxes**: Axis-aligned boxes of yaw-rotated, scaled items
//! - **Validator**: No overlap with other items, no crossing of the room walls
//! - **Grid search**: Deterministic scan for the first free floor cell
//!
//! ### Scene State
//! - **Scene**: Ordered items, single selection, camera view, gesture mode
//! - **Planner state**: Scene plus undo/redo history, settings and file I/O
//! - **Interaction**: Drag, scale and click handling for one item
//!
//! ### Collaborators
//! - **Assets**: Asynchronous dimension lookup with caching and fallbacks
//! - **Rendering**: `RenderItem` lists consumed by a `Renderer`
//! - **Serialization**: Versioned JSON scene files
//!
//! ## Architecture
//!
//! ```text
//! pointer events
//!   └── ItemInteraction (live transform)
//!         └── PlacementValidator ── BoundingBox
//!               └── PlannerState (commit + history)
//!                     └── Scene ── SceneStore / SelectionManager
//!                           └── Renderer
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roomplan_designer::{DimensionResolver, PlannerState};
//! use roomplan_core::{Catalog, NotificationCenter};
//!
//! let mut state = PlannerState::new();
//! let catalog = Catalog::builtin();
//! let resolver = DimensionResolver::offline();
//! let center = NotificationCenter::default();
//!
//! let bed = catalog.get("bed-1")?;
//! let outcome = state.place_furniture(bed, &resolver, &center).await;
//! ```

pub mod assets;
pub mod bounding_box;
pub mod commands;
pub mod interaction;
pub mod item;
pub mod placement;
pub mod planner_state;
pub mod scene;
pub mod scene_store;
pub mod selection_manager;
pub mod serialization;
pub mod validator;

// Re-export all public types from submodules
pub use assets::{AssetLoader, DimensionResolver, ManifestAssetLoader, OfflineAssetLoader};
pub use bounding_box::{normalize_angle, BoundingBox};
pub use commands::PlannerCommand;
pub use interaction::{
    FloorProjector, GestureOutcome, InteractionPhase, InteractionSettings, ItemInteraction,
};
pub use item::{Footprint, PlacedItem, Transform};
pub use placement::{find_placement, PlacementGrid};
pub use scene::{
    CameraPreset, CameraView, InteractiveMode, ItemUpdate, RenderItem, RenderShape, Renderer,
    Scene, TransformMode,
};
pub use scene_store::SceneStore;
pub use selection_manager::SelectionManager;
pub use serialization::{SceneFile, SceneMetadata};
pub use validator::{is_valid_position, PlacementValidator};

// State and integration
pub use planner_state::{
    LoadSummary, PlacementOutcome, PlannerSettings, PlannerState, RotationDirection,
};
