//! Undo/redo history for planner state.

use super::PlannerState;
use crate::commands::PlannerCommand;

impl PlannerState {
    /// Applies `cmd` to the scene and records it.
    pub fn push_command(&mut self, mut cmd: PlannerCommand) {
        cmd.apply(&mut self.scene);
        tracing::debug!("{}", cmd.name());
        self.undo_stack.push(cmd);
        self.redo_stack.clear();
        let limit = self.settings.max_undo_depth.max(1);
        if self.undo_stack.len() > limit {
            let excess = self.undo_stack.len() - limit;
            self.undo_stack.drain(..excess);
        }
        self.is_modified = true;
    }

    /// Undo last change
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(mut cmd) => {
                cmd.undo(&mut self.scene);
                tracing::debug!("Undo {}", cmd.name());
                self.redo_stack.push(cmd);
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    /// Redo last undo
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(mut cmd) => {
                cmd.apply(&mut self.scene);
                tracing::debug!("Redo {}", cmd.name());
                self.undo_stack.push(cmd);
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
