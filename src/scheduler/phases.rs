//! Phase derivation for one production.
//!
//! Given a committed pre-production start, derives the four phase
//! sub-schedules and the overall block:
//!
//! 1. Pre-production: fixed 5 weeks.
//! 2. Shoot: fixed 2 weeks, immediately after pre-production.
//! 3. Edit: 2 weeks per episode, staggered 1 week apart so one edit
//!    finishes per week; episodes round-robin across the two editors.
//! 4. Publish: weekly on Saturdays, anchored to the first Saturday
//!    on/after the first edit's end. Weekly-on-Saturday is a fixed
//!    release policy, not derived from data.
//!
//! All arithmetic is total; a production with zero qualifying episodes
//! still gets valid pre-production and shoot ranges, with empty edit
//! and publish lists.

use chrono::NaiveDate;

use crate::calendar::{add_days, add_weeks, next_saturday};
use crate::models::{DateRange, EditBlock, Episode, PublishBlock};

/// Pre-production duration.
pub const PREPROD_WEEKS: i64 = 5;
/// Shooting duration.
pub const SHOOT_WEEKS: i64 = 2;
/// Editing duration per episode.
pub const EDIT_WEEKS_PER_EPISODE: i64 = 2;
/// Offset between consecutive episode edits.
pub const EDIT_STAGGER_WEEKS: i64 = 1;
/// Number of fixed editors the edit round-robin cycles through.
pub const EDITOR_SLOTS: usize = 2;

/// The derived phase schedule for one production.
#[derive(Debug, Clone)]
pub struct PhasePlan {
    /// Pre-production range.
    pub preprod: DateRange,
    /// First day after pre-production; fed back to the allocator as the
    /// producer's new availability.
    pub preprod_next_start: NaiveDate,
    /// Shooting range.
    pub shoot: DateRange,
    /// Per-episode edit blocks, in episode order.
    pub edits: Vec<EditBlock>,
    /// Per-episode publish blocks, in episode order.
    pub publishes: Vec<PublishBlock>,
    /// Overall span: pre-production start to last publish end, or to
    /// shoot end when no episodes qualify.
    pub block: DateRange,
}

impl PhasePlan {
    /// Derives the phase schedule for a production's qualifying
    /// episodes, starting pre-production on `chosen_start`.
    ///
    /// `episodes` must already be filtered to schedulable types and
    /// sorted into episode order (see
    /// [`Production::schedulable_episodes`](crate::models::Production::schedulable_episodes)).
    pub fn for_production(episodes: &[Episode], chosen_start: NaiveDate) -> Self {
        let (preprod, preprod_next_start) = weeks_range(chosen_start, PREPROD_WEEKS);
        let (shoot, edit_start_base) = weeks_range(preprod_next_start, SHOOT_WEEKS);

        let edits: Vec<EditBlock> = episodes
            .iter()
            .enumerate()
            .map(|(index, ep)| {
                let start = add_weeks(edit_start_base, index as i64 * EDIT_STAGGER_WEEKS);
                EditBlock {
                    episode_id: ep.id,
                    title: ep.title.clone(),
                    start,
                    end: add_days(start, EDIT_WEEKS_PER_EPISODE * 7 - 1),
                    editor_slot: index % EDITOR_SLOTS,
                    index,
                    episode_type: ep.episode_type.clone(),
                }
            })
            .collect();

        // The publish rhythm anchors on the first edit's end even though
        // later edits are still in flight.
        let edit_end_for_publish = edits
            .first()
            .map(|e| e.end)
            .unwrap_or_else(|| add_days(edit_start_base, EDIT_WEEKS_PER_EPISODE * 7 - 1));
        let publish_start = next_saturday(edit_end_for_publish);

        let publishes: Vec<PublishBlock> = edits
            .iter()
            .map(|edit| {
                let publish_date = add_weeks(publish_start, edit.index as i64);
                PublishBlock {
                    episode_id: edit.episode_id,
                    title: edit.title.clone(),
                    start: publish_date,
                    end: add_days(publish_date, 6),
                    index: edit.index,
                    publish_date,
                    episode_type: edit.episode_type.clone(),
                }
            })
            .collect();

        let block_end = publishes.last().map(|p| p.end).unwrap_or(shoot.end);
        let block = DateRange::new(preprod.start, block_end);

        Self {
            preprod,
            preprod_next_start,
            shoot,
            edits,
            publishes,
            block,
        }
    }
}

/// An inclusive range spanning whole weeks, plus the first day after it.
fn weeks_range(start: NaiveDate, weeks: i64) -> (DateRange, NaiveDate) {
    let end = add_days(start, weeks * 7 - 1);
    (DateRange::new(start, end), add_days(start, weeks * 7))
}
