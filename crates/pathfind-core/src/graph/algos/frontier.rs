use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::graph::types::{Cost, NodeId};

/// Order in which the engine takes nodes off the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Min-heap keyed by distance
    MinCost,
    /// Min-heap keyed by distance plus heuristic estimate
    MinEstimate,
    /// Round-based relaxation bounded by |V| - 1 passes
    Rounds,
    /// First in, first out
    Fifo,
    /// Last in, first out
    Lifo,
}

/// Wrapper for BinaryHeap to use as min-heap (ordered by priority, then node)
#[derive(Debug, Clone)]
pub struct HeapEntry<N> {
    pub node: N,
    pub priority: Cost,
    /// Distance of `node` when the entry was pushed
    pub distance: Cost,
}

impl<N: NodeId> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: NodeId> Eq for HeapEntry<N> {}

impl<N: NodeId> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: NodeId> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Pending nodes of a running search
#[derive(Debug)]
pub enum Frontier<N: NodeId> {
    Heap(BinaryHeap<Reverse<HeapEntry<N>>>),
    Queue(VecDeque<HeapEntry<N>>),
    Stack(Vec<HeapEntry<N>>),
}

impl<N: NodeId> Frontier<N> {
    pub fn for_discipline(discipline: Discipline) -> Self {
        match discipline {
            Discipline::MinCost | Discipline::MinEstimate => Frontier::Heap(BinaryHeap::new()),
            Discipline::Fifo | Discipline::Rounds => Frontier::Queue(VecDeque::new()),
            Discipline::Lifo => Frontier::Stack(Vec::new()),
        }
    }

    pub fn push(&mut self, entry: HeapEntry<N>) {
        match self {
            Frontier::Heap(heap) => heap.push(Reverse(entry)),
            Frontier::Queue(queue) => queue.push_back(entry),
            Frontier::Stack(stack) => stack.push(entry),
        }
    }

    pub fn pop(&mut self) -> Option<HeapEntry<N>> {
        match self {
            Frontier::Heap(heap) => heap.pop().map(|Reverse(entry)| entry),
            Frontier::Queue(queue) => queue.pop_front(),
            Frontier::Stack(stack) => stack.pop(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Heap(heap) => heap.len(),
            Frontier::Queue(queue) => queue.len(),
            Frontier::Stack(stack) => stack.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
