//! Producer allocation.
//!
//! # Algorithm
//!
//! Greedy earliest-candidate assignment: for each production (in backlog
//! order) every slot offers `max(next_available, desired_preprod_start)`,
//! and the slot with the strictly earliest offer wins — ties keep the
//! lowest index. A slot frees at pre-production *end*, not shoot end:
//! a producer can start planning the next production while the current
//! one is being shot.
//!
//! No backtracking is attempted. With the backlog pre-sorted by desired
//! shoot start and a pool of at most two producers, greedy per-item
//! assignment is sufficient to avoid producer starvation.

use chrono::NaiveDate;

/// One producer in the pool.
#[derive(Debug, Clone)]
pub struct ProducerSlot {
    /// Slot index (0 or 1).
    pub index: usize,
    /// Earliest date this producer can start a new pre-production.
    /// Monotonically non-decreasing across a run.
    pub next_available: NaiveDate,
}

/// The producer pool for one scheduling run.
///
/// Constructed fresh per invocation; never shared across runs.
#[derive(Debug, Clone)]
pub struct ProducerPool {
    slots: Vec<ProducerSlot>,
}

impl ProducerPool {
    /// Clamps a requested pool size to the supported range:
    /// `>= 2` becomes 2, anything else (including 0 and negatives)
    /// becomes 1.
    pub fn clamp_count(requested: i64) -> usize {
        if requested >= 2 {
            2
        } else {
            1
        }
    }

    /// Creates a pool of `count` slots, all available from `base_date`.
    pub fn new(count: usize, base_date: NaiveDate) -> Self {
        let slots = (0..count)
            .map(|index| ProducerSlot {
                index,
                next_available: base_date,
            })
            .collect();
        Self { slots }
    }

    /// Number of slots in the pool.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the pool has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read access to the slots.
    pub fn slots(&self) -> &[ProducerSlot] {
        &self.slots
    }

    /// Chooses the producer for one production.
    ///
    /// Returns `(slot_index, chosen_preprod_start)`. Does not advance
    /// availability; call [`commit`](Self::commit) once the phase
    /// calculator has produced the pre-production end.
    pub fn assign(&self, desired_preprod_start: Option<NaiveDate>) -> (usize, NaiveDate) {
        let mut chosen = 0;
        let mut chosen_start = self.candidate(0, desired_preprod_start);

        for i in 1..self.slots.len() {
            let candidate = self.candidate(i, desired_preprod_start);
            if candidate < chosen_start {
                chosen = i;
                chosen_start = candidate;
            }
        }

        (chosen, chosen_start)
    }

    /// Advances a slot's availability to the committed date.
    pub fn commit(&mut self, slot: usize, next_available: NaiveDate) {
        debug_assert!(next_available >= self.slots[slot].next_available);
        self.slots[slot].next_available = next_available;
    }

    fn candidate(&self, slot: usize, desired: Option<NaiveDate>) -> NaiveDate {
        let available = self.slots[slot].next_available;
        match desired {
            Some(d) => available.max(d),
            None => available,
        }
    }
}
