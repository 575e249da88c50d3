//! Per-request resolution stack

use graft_domain::{CapabilityId, Error, Result};
use tracing::trace;

/// Chain of capabilities currently being resolved
///
/// One stack is created for every top-level request and threaded through the
/// recursion by `&mut`, so concurrent requests never observe each other.
/// A capability may appear at most once; entering it twice is a cycle.
#[derive(Debug, Default)]
pub struct ResolutionStack {
    frames: Vec<CapabilityId>,
}

impl ResolutionStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `capability`, failing with `CyclicDependency` if it is already present
    pub fn enter(&mut self, capability: &CapabilityId) -> Result<()> {
        if self.contains(capability) {
            return Err(Error::cyclic_dependency(
                capability.clone(),
                self.frames.clone(),
            ));
        }
        trace!(capability = %capability, depth = self.frames.len(), "Enter");
        self.frames.push(capability.clone());
        Ok(())
    }

    /// Pop the innermost capability
    pub fn exit(&mut self) -> Option<CapabilityId> {
        let frame = self.frames.pop();
        if let Some(capability) = &frame {
            trace!(capability = %capability, depth = self.frames.len(), "Exit");
        }
        frame
    }

    /// Whether `capability` is being resolved
    pub fn contains(&self, capability: &CapabilityId) -> bool {
        self.frames.contains(capability)
    }

    /// Current depth
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Frames, outermost first
    pub fn frames(&self) -> &[CapabilityId] {
        &self.frames
    }
}
