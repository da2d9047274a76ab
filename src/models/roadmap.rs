//! Roadmap (solution) model.
//!
//! A roadmap is the complete output of one scheduling run: the calendar
//! week axis, the opened display tracks, and one [`ScheduledProduction`]
//! per input production with all four phase sub-schedules. Pure output —
//! created once, never mutated after emission.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::Week;
use crate::models::EpisodeType;

/// An inclusive calendar date range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether a date falls within this range.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whether two inclusive ranges share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// The edit sub-block for one episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBlock {
    /// Episode being edited.
    pub episode_id: i64,
    /// Episode title (denormalized for rendering).
    pub title: String,
    /// First day of the edit.
    pub start: NaiveDate,
    /// Last day of the edit.
    pub end: NaiveDate,
    /// Which of the two fixed editors handles this edit (round-robin).
    pub editor_slot: usize,
    /// Position of the episode within its production (0-based).
    pub index: usize,
    /// Episode classification.
    pub episode_type: EpisodeType,
}

/// The publish sub-block for one episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishBlock {
    /// Episode being published.
    pub episode_id: i64,
    /// Episode title (denormalized for rendering).
    pub title: String,
    /// First day of the display block (the publish date itself).
    pub start: NaiveDate,
    /// Last day of the display block (`publish_date + 6` days).
    pub end: NaiveDate,
    /// Position of the episode within its production (0-based).
    pub index: usize,
    /// Release date; always a Saturday.
    pub publish_date: NaiveDate,
    /// Episode classification.
    pub episode_type: EpisodeType,
}

/// One fully scheduled production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledProduction {
    /// Production identifier.
    pub id: i64,
    /// Production title.
    pub title: String,
    /// Assigned display track (1-based).
    pub track: usize,
    /// Assigned display color (hex).
    pub color: String,
    /// Producer slot this production was allocated to.
    pub producer_index: usize,
    /// Pre-production phase.
    pub preprod: DateRange,
    /// Shooting phase.
    pub shoot: DateRange,
    /// Per-episode edit blocks, in episode order.
    pub edits: Vec<EditBlock>,
    /// Per-episode publish blocks, in episode order.
    pub publishes: Vec<PublishBlock>,
    /// Overall span from pre-production start to last publish end
    /// (shoot end when no episodes qualify).
    pub block: DateRange,
}

/// A display track opened by the packer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackLabel {
    /// Track identifier (1-based, in creation order).
    pub id: usize,
    /// Display label (`"Track 1"`, ...).
    pub label: String,
}

/// The complete output of one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    /// Monday-aligned week axis for the covered year.
    pub weeks: Vec<Week>,
    /// Tracks opened by the packer, in creation order.
    pub tracks: Vec<TrackLabel>,
    /// Scheduled productions, in allocation order.
    pub series: Vec<ScheduledProduction>,
    /// Effective producer pool size after clamping.
    pub producer_count: usize,
    /// Calendar year the week axis covers.
    pub year: i32,
}

impl Roadmap {
    /// Returns all productions assigned to a given track.
    pub fn series_on_track(&self, track_id: usize) -> Vec<&ScheduledProduction> {
        self.series.iter().filter(|s| s.track == track_id).collect()
    }

    /// Finds the scheduled entry for a production id.
    pub fn series_for_production(&self, id: i64) -> Option<&ScheduledProduction> {
        self.series.iter().find(|s| s.id == id)
    }

    /// Number of tracks the packer opened.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}
