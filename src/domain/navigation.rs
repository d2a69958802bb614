//! Navigation stack - the path of visited steps

use serde::{Deserialize, Serialize};

use crate::schemas::StepId;

/// Ordered history of visited steps.
///
/// Invariants: never empty, first element is the initial step, last element
/// is the step currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationStack {
    steps: Vec<StepId>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStack {
    /// A stack holding only the initial step
    pub fn new() -> Self {
        Self {
            steps: vec![StepId::INITIAL],
        }
    }

    /// The step currently shown
    pub fn current(&self) -> StepId {
        // The stack is never empty, see `retreat`.
        self.steps.last().copied().unwrap_or(StepId::INITIAL)
    }

    /// Number of steps visited so far, the current one included
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Push `next` as the new current step.
    ///
    /// The caller obtains `next` from the router.
    pub fn advance(&mut self, next: StepId) {
        self.steps.push(next);
    }

    /// Drop the current step. At the initial step this is a no-op.
    ///
    /// Returns the step that was left, if any.
    pub fn retreat(&mut self) -> Option<StepId> {
        if self.steps.len() > 1 {
            self.steps.pop()
        } else {
            None
        }
    }

    /// Back to a single-element stack at the initial step
    pub fn reset(&mut self) {
        self.steps.clear();
        self.steps.push(StepId::INITIAL);
    }

    /// Whether a retreat would move
    pub fn can_retreat(&self) -> bool {
        self.steps.len() > 1
    }

    /// The visited path, initial step first
    pub fn path(&self) -> &[StepId] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack() {
        let stack = NavigationStack::new();
        assert_eq!(stack.current(), StepId::Main);
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_retreat());
    }

    #[test]
    fn test_advance_and_retreat() {
        let mut stack = NavigationStack::new();
        stack.advance(StepId::LiveType);
        stack.advance(StepId::LiveHireRole);
        assert_eq!(stack.current(), StepId::LiveHireRole);
        assert_eq!(stack.depth(), 3);

        assert_eq!(stack.retreat(), Some(StepId::LiveHireRole));
        assert_eq!(stack.current(), StepId::LiveType);
        assert_eq!(stack.retreat(), Some(StepId::LiveType));
        assert_eq!(stack.current(), StepId::Main);
    }

    #[test]
    fn test_retreat_at_initial_is_noop() {
        let mut stack = NavigationStack::new();
        assert_eq!(stack.retreat(), None);
        assert_eq!(stack.retreat(), None);
        assert_eq!(stack.path(), &[StepId::Main]);
    }

    #[test]
    fn test_reset() {
        let mut stack = NavigationStack::new();
        stack.advance(StepId::StudioType);
        stack.advance(StepId::StudioDetails);
        stack.reset();
        assert_eq!(stack.path(), &[StepId::Main]);
    }
}
