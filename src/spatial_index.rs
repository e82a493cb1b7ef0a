//! Spatial Index Module
//!
//! R-tree over board item bounds for point hit-testing. The index only
//! answers "which boxes contain this point"; z-order resolution is left to
//! the board, which owns the ordering.

use crate::types::Bounds;
use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// A board item's bounding box as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub item_id: u64,
    pub bounds: Bounds,
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.min_x, self.bounds.min_y],
            [self.bounds.max_x, self.bounds.max_y],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index for board items.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<u64, SpatialEntry>,
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the bounds of `item_id`.
    pub fn upsert(&mut self, item_id: u64, bounds: Bounds) {
        if let Some(old_entry) = self.entries.remove(&item_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry { item_id, bounds };
        self.tree.insert(entry);
        self.entries.insert(item_id, entry);
    }

    pub fn remove(&mut self, item_id: u64) -> bool {
        match self.entries.remove(&item_id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Ids of all items whose bounds contain the point, in no particular order.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<u64> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.bounds.contains(x, y))
            .map(|entry| entry.item_id)
            .collect()
    }

    pub fn bounds(&self, item_id: u64) -> Option<Bounds> {
        self.entries.get(&item_id).map(|e| e.bounds)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
