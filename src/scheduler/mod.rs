//! The roadmap scheduling pipeline.
//!
//! One scheduling run flows strictly forward through three stages plus
//! the calendar axis: producer allocation ([`ProducerPool`]), phase
//! derivation ([`PhasePlan`]), track packing ([`TrackPacker`]), then
//! the week axis. [`RoadmapScheduler`] drives the pipeline; all stage
//! state is constructed fresh per invocation, so concurrent runs over
//! the same input snapshot never share mutable state.
//!
//! The whole computation is a deterministic, side-effect-free
//! transformation: identical input and pool size produce identical
//! output.

mod allocator;
mod phases;
mod tracks;

pub use allocator::{ProducerPool, ProducerSlot};
pub use phases::{
    PhasePlan, EDITOR_SLOTS, EDIT_STAGGER_WEEKS, EDIT_WEEKS_PER_EPISODE, PREPROD_WEEKS,
    SHOOT_WEEKS,
};
pub use tracks::{Placement, Track, TrackPacker, COLOR_PALETTE};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{add_weeks, week_axis};
use crate::models::{
    earliest_target_shoot_start, sort_pending, Production, Roadmap, ScheduledProduction,
};

/// Input container for one scheduling run.
///
/// `today` is injected rather than read from a system clock so the run
/// stays a pure function: it anchors the week-axis year and serves as
/// the producer base date when no production has a desired shoot start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapRequest {
    /// Pending productions (any order; the scheduler sorts them).
    pub productions: Vec<Production>,
    /// Requested producer pool size; clamped to `{1, 2}`.
    pub producer_count: i64,
    /// The current date, as decided by the caller.
    pub today: NaiveDate,
}

impl RoadmapRequest {
    /// Creates a request with a single-producer pool.
    pub fn new(productions: Vec<Production>, today: NaiveDate) -> Self {
        Self {
            productions,
            producer_count: 1,
            today,
        }
    }

    /// Sets the requested producer pool size.
    pub fn with_producer_count(mut self, producer_count: i64) -> Self {
        self.producer_count = producer_count;
        self
    }
}

/// Greedy roadmap scheduler.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roadmap_scheduler::models::{Episode, EpisodeType, Production};
/// use roadmap_scheduler::scheduler::{RoadmapRequest, RoadmapScheduler};
///
/// let shoot_start = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
/// let production = Production::new(1)
///     .with_title("Desert Series")
///     .with_target_shoot_start(shoot_start)
///     .with_episode(Episode::new(1, EpisodeType::Cornerstone).with_sort_order(0));
///
/// let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
/// let request = RoadmapRequest::new(vec![production], today);
/// let roadmap = RoadmapScheduler::new().schedule(&request);
///
/// assert_eq!(roadmap.series.len(), 1);
/// assert_eq!(roadmap.series[0].shoot.start, shoot_start);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoadmapScheduler;

impl RoadmapScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Computes the full roadmap for a backlog.
    ///
    /// # Algorithm
    /// 1. Clamp the producer pool size.
    /// 2. Sort productions by desired shoot start (nulls last, then id).
    /// 3. Per production: allocate a producer, derive phases, commit the
    ///    producer's availability to pre-production end, pack the block
    ///    into a display track.
    /// 4. Build the week axis for `today`'s year.
    pub fn schedule(&self, request: &RoadmapRequest) -> Roadmap {
        let producer_count = ProducerPool::clamp_count(request.producer_count);

        let mut productions = request.productions.clone();
        sort_pending(&mut productions);

        let base_date = earliest_target_shoot_start(&productions)
            .map(|earliest| add_weeks(earliest, -PREPROD_WEEKS))
            .unwrap_or(request.today);

        let mut pool = ProducerPool::new(producer_count, base_date);
        let mut packer = TrackPacker::new();
        let mut series = Vec::with_capacity(productions.len());

        for production in &productions {
            let episodes = production.schedulable_episodes();
            let desired_preprod_start = production
                .target_shoot_start
                .map(|shoot| add_weeks(shoot, -PREPROD_WEEKS));

            let (producer_index, chosen_start) = pool.assign(desired_preprod_start);
            let plan = PhasePlan::for_production(&episodes, chosen_start);
            // The producer frees at preprod end, not shoot end
            pool.commit(producer_index, plan.preprod_next_start);

            let placement = packer.place(&plan.block);

            series.push(ScheduledProduction {
                id: production.id,
                title: production.title.clone(),
                track: placement.track_id,
                color: placement.color.to_string(),
                producer_index,
                preprod: plan.preprod,
                shoot: plan.shoot,
                edits: plan.edits,
                publishes: plan.publishes,
                block: plan.block,
            });
        }

        let year = request.today.year();

        Roadmap {
            weeks: week_axis(year),
            tracks: packer.labels(),
            series,
            producer_count,
            year,
        }
    }
}
