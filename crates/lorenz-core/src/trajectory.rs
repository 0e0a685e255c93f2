// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A bounded, time-ordered history of visited states.

use crate::dynamics::LorenzState;
use crate::error::ConfigError;
use crate::math::Vec3;
use std::collections::VecDeque;

/// Upper bound on the storage reserved up front; larger buffers grow on demand.
const MAX_PREALLOCATED_POINTS: usize = 1 << 16;

/// A FIFO ring of states holding at most `capacity` entries.
///
/// Insertion order is time order: the front is the oldest state, the back the
/// newest. Once full, every append evicts exactly one state from the front.
#[derive(Debug, Clone)]
pub struct TrajectoryBuffer {
    points: VecDeque<LorenzState>,
    capacity: usize,
}

impl TrajectoryBuffer {
    /// Creates an empty buffer bounded to `capacity` states.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        // One extra slot: the append happens before the eviction.
        let reserved = capacity.saturating_add(1).min(MAX_PREALLOCATED_POINTS);
        Ok(Self {
            points: VecDeque::with_capacity(reserved),
            capacity,
        })
    }

    /// Appends `point` and, if the buffer then exceeds its capacity, removes
    /// and returns the oldest state.
    pub fn append_and_evict(&mut self, point: LorenzState) -> Option<LorenzState> {
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front()
        } else {
            None
        }
    }

    /// The maximum number of states retained.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of states currently retained.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no state has been appended yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` once the buffer holds `capacity` states.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.points.len() == self.capacity
    }

    /// The oldest retained state.
    pub fn oldest(&self) -> Option<&LorenzState> {
        self.points.front()
    }

    /// The most recently appended state.
    pub fn newest(&self) -> Option<&LorenzState> {
        self.points.back()
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &LorenzState> + '_ {
        self.points.iter()
    }

    /// Iterates from oldest to newest, converting each state to a display vertex.
    pub fn scaled_points(&self, scale: f64) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.points.iter().map(move |state| state.scaled(scale))
    }
}
