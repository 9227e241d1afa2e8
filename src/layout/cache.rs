use std::collections::HashMap;

use tracing::{debug, trace};

use super::params::LayoutParams;
use super::radial::{NodePositions, RadialLayout, RoleSlots, SlotKey, assign_slots};
use crate::graph::ServiceGraph;

/// Number of distinct graph shapes kept before the cache starts over
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Memoized radial layout
///
/// Slot geometry only depends on the [`SlotKey`] of a graph, so graphs with
/// the same role counts reuse one computation. At most `capacity` shapes are
/// kept; a miss on a full cache drops every entry first.
#[derive(Debug)]
pub struct LayoutCache {
    layout: RadialLayout,
    slots: HashMap<SlotKey, RoleSlots>,
    capacity: usize,
    hits: usize,
    misses: usize,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::with_layout(RadialLayout::default())
    }
}

impl LayoutCache {
    pub fn new(params: LayoutParams) -> Self {
        Self::with_layout(RadialLayout::new(params))
    }

    pub fn with_layout(layout: RadialLayout) -> Self {
        Self::with_capacity(layout, DEFAULT_CACHE_CAPACITY)
    }

    /// Cache holding at most `capacity` shapes (at least one)
    pub fn with_capacity(layout: RadialLayout, capacity: usize) -> Self {
        Self {
            layout,
            slots: HashMap::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    pub fn radial(&self) -> &RadialLayout {
        &self.layout
    }

    pub fn slots(&mut self, key: SlotKey) -> &RoleSlots {
        if self.slots.contains_key(&key) {
            self.hits += 1;
            trace!(?key, "Layout cache hit");
        } else {
            self.misses += 1;
            trace!(?key, "Layout cache miss");

            if self.slots.len() >= self.capacity {
                debug!(capacity = self.capacity, "Layout cache full, clearing");
                self.slots.clear();
            }
        }

        let layout = &self.layout;
        self.slots.entry(key).or_insert_with(|| layout.slots(key))
    }

    pub fn layout(&mut self, graph: &ServiceGraph) -> NodePositions {
        let key = SlotKey::for_graph(graph);
        let slots = self.slots(key);
        assign_slots(graph, slots)
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop every cached shape; hit and miss counters are kept
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
