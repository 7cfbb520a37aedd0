#[path = "core/bounding_box.rs"]
mod bounding_box;
#[path = "core/interaction.rs"]
mod interaction;
#[path = "core/placement.rs"]
mod placement;
#[path = "core/planner_state.rs"]
mod planner_state;
#[path = "core/validator.rs"]
mod validator;
