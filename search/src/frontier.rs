//! Best-first frontier with insertion-order tie-breaking.
//!
//! Entries are never updated in place. An improved path to a node is pushed
//! as a new entry, and the caller discards stale entries when they surface
//! (lazy deletion against its closed set).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use courier_kernel::graph::NodeId;

/// The frontier ordering key: `(f, sequence)`.
///
/// Lower `f` first; equal `f` pops in push order. `f` is compared with
/// `f64::total_cmp`, so the order is total even for unusual values.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub f: f64,
    pub sequence: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// A pending node with the costs it was pushed with.
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub g: f64,
    pub h: f64,
    pub key: FrontierKey,
}

impl FrontierEntry {
    #[must_use]
    pub fn f(&self) -> f64 {
        self.key.f
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier keyed by `f = g + h`.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse`. Sequence
/// numbers are unique per frontier, which makes every pop deterministic.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_sequence: u64,
    high_water: usize,
}

impl PriorityFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `node` with priority `g + h`. Returns the entry's sequence number.
    pub fn push(&mut self, node: NodeId, g: f64, h: f64) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(FrontierEntry {
            node,
            g,
            h,
            key: FrontierKey { f: g + h, sequence },
        }));
        self.high_water = self.high_water.max(self.heap.len());
        sequence
    }

    /// Pop the entry with the lowest `f` (oldest first on ties).
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Pending entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total entries ever pushed.
    #[must_use]
    pub fn pushed(&self) -> u64 {
        self.next_sequence
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
