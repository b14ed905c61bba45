//! Current-execution slot shared between the list and detail pages.
//!
//! The list page writes the execution it navigates from; the detail
//! page reads name/tag from here instead of fetching execution
//! metadata itself. The slot is owned by the browse session and passed
//! explicitly, so the coupling is visible in signatures.

use crate::api::Execution;

#[derive(Debug, Default)]
pub struct ExecutionStore {
    current: Option<Execution>,
}

impl ExecutionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is held.
    pub fn set(&mut self, execution: Execution) {
        self.current = Some(execution);
    }

    /// Reset to the initial (empty) state.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Execution> {
        self.current.as_ref()
    }
}
