//! Composite action.

use super::FilterAction;
use crate::domain::{CommandLine, SenderAdapter};

/// Runs several actions in order.
#[derive(Default)]
pub struct CompositeAction {
    actions: Vec<Box<dyn FilterAction>>,
}

impl CompositeAction {
    pub fn new(actions: Vec<Box<dyn FilterAction>>) -> Self {
        Self { actions }
    }

    pub fn push(&mut self, action: Box<dyn FilterAction>) {
        self.actions.push(action);
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl FilterAction for CompositeAction {
    fn on_denial(&self, line: &CommandLine, sender: &dyn SenderAdapter) {
        for action in &self.actions {
            action.on_denial(line, sender);
        }
    }

    fn on_bypass(&self, line: &CommandLine, sender: &dyn SenderAdapter) {
        for action in &self.actions {
            action.on_bypass(line, sender);
        }
    }
}
