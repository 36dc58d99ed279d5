//! Append-only position history, one per body
//!
//! Each completed integrator step appends exactly one position. The sequence
//! is the time axis: entry `i` is the body's position after step `i`. Entries
//! are never overwritten or removed, so a consumer (e.g. an animation loop)
//! can index by step or re-iterate from the start at any point between steps

use std::ops::Index;

use super::states::NVec3;

/// Ordered sequence of positions recorded over a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<NVec3>,
}

impl Trajectory {
    /// Empty trajectory preallocated for `steps` entries.
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            points: Vec::with_capacity(steps),
        }
    }

    /// Append the position produced by one completed step.
    pub(crate) fn record(&mut self, x: NVec3) {
        self.points.push(x);
    }

    /// Number of completed steps recorded so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position after step `step`, or `None` past the recorded end.
    pub fn position(&self, step: usize) -> Option<&NVec3> {
        self.points.get(step)
    }

    /// Most recently recorded position.
    pub fn last(&self) -> Option<&NVec3> {
        self.points.last()
    }

    /// All recorded positions in step order.
    pub fn positions(&self) -> &[NVec3] {
        &self.points
    }
}

impl Index<usize> for Trajectory {
    type Output = NVec3;

    fn index(&self, step: usize) -> &NVec3 {
        &self.points[step]
    }
}
