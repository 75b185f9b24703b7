//! Per-search label arena
//!
//! Labels live in a flat `Vec` and refer to their predecessor by slot index,
//! so a predecessor chain is plain data with no ownership cycles. The whole
//! table is dropped when the search result is dropped.

use std::collections::HashMap;

use crate::graph::types::{Cost, Edge, NodeId};

/// Search state of one node
#[derive(Debug, Clone)]
pub struct Label<N> {
    pub node: N,
    /// Best known distance from the source
    pub distance: Cost,
    /// Number of edges on the best known path
    pub hops: usize,
    /// Slot of the predecessor label
    pub predecessor: Option<usize>,
    /// Edge followed from the predecessor
    pub via: Option<Edge<N>>,
}

#[derive(Debug, Clone)]
pub struct LabelTable<N: NodeId> {
    slots: HashMap<N, usize>,
    labels: Vec<Label<N>>,
}

impl<N: NodeId> Default for LabelTable<N> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            labels: Vec::new(),
        }
    }
}

impl<N: NodeId> LabelTable<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn slot(&self, node: &N) -> Option<usize> {
        self.slots.get(node).copied()
    }

    pub fn get(&self, slot: usize) -> &Label<N> {
        &self.labels[slot]
    }

    pub fn label(&self, node: &N) -> Option<&Label<N>> {
        self.slot(node).map(|slot| &self.labels[slot])
    }

    /// Slot for `node`, creating an unreached label (infinite distance)
    pub fn slot_or_insert(&mut self, node: &N) -> usize {
        if let Some(slot) = self.slots.get(node) {
            return *slot;
        }
        let slot = self.labels.len();
        self.labels.push(Label {
            node: node.clone(),
            distance: Cost::INFINITY,
            hops: 0,
            predecessor: None,
            via: None,
        });
        self.slots.insert(node.clone(), slot);
        slot
    }

    /// Label `slot` as reached through `edge` from `predecessor`
    pub fn settle(&mut self, slot: usize, distance: Cost, predecessor: usize, edge: &Edge<N>) {
        let hops = self.labels[predecessor].hops + 1;
        let label = &mut self.labels[slot];
        label.distance = distance;
        label.hops = hops;
        label.predecessor = Some(predecessor);
        label.via = Some(edge.clone());
    }

    /// Label the search origin
    pub fn seed(&mut self, node: &N) -> usize {
        let slot = self.slot_or_insert(node);
        self.labels[slot].distance = Cost::ZERO;
        slot
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label<N>> {
        self.labels.iter()
    }
}
