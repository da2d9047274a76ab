//! Track packing (greedy interval partitioning).
//!
//! # Algorithm
//!
//! Each track remembers only its most recent block's end date. A new
//! block goes to the compatible track (`last_end <= block.start`) with
//! the latest `last_end` — tightest packing, minimizing the idle gap —
//! and a new track is opened when none is compatible. Ties keep the
//! lowest-id track.
//!
//! Tracks are a display concept, not a resource: the per-track color
//! cycle over a fixed 3-color palette only distinguishes consecutive
//! blocks visually.
//!
//! # Complexity
//! O(N·T) with a linear scan per insertion. T stays small (bounded by
//! concurrent productions), so no interval tree is warranted.

use chrono::NaiveDate;

use crate::models::{DateRange, TrackLabel};

/// Display colors cycled per track.
pub const COLOR_PALETTE: [&str; 3] = ["#4DD0E1", "#F59E0B", "#60A5FA"];

/// One open display track.
#[derive(Debug, Clone)]
pub struct Track {
    /// Track identifier (1-based, in creation order).
    pub id: usize,
    /// End date of the most recently placed block.
    pub last_end: NaiveDate,
    /// Palette index of the most recently placed block.
    pub last_color_index: Option<usize>,
}

/// Where a block landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Assigned track id (1-based).
    pub track_id: usize,
    /// Assigned display color.
    pub color: &'static str,
}

/// Packs production blocks into non-overlapping display tracks.
///
/// Constructed fresh per scheduling run. Correct for any input order:
/// compatibility is checked against each track's latest end date, not
/// an assumption of chronologically sorted blocks.
#[derive(Debug, Clone, Default)]
pub struct TrackPacker {
    tracks: Vec<Track>,
}

impl TrackPacker {
    /// Creates an empty packer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a block on the best compatible track, opening a new one
    /// when none fits.
    pub fn place(&mut self, block: &DateRange) -> Placement {
        let mut chosen: Option<usize> = None;

        for (i, track) in self.tracks.iter().enumerate() {
            if track.last_end > block.start {
                continue;
            }
            match chosen {
                // Prefer the latest last_end; ties keep the incumbent
                Some(j) if self.tracks[j].last_end >= track.last_end => {}
                _ => chosen = Some(i),
            }
        }

        let index = match chosen {
            Some(i) => i,
            None => {
                self.tracks.push(Track {
                    id: self.tracks.len() + 1,
                    last_end: block.end,
                    last_color_index: None,
                });
                self.tracks.len() - 1
            }
        };

        let track = &mut self.tracks[index];
        track.last_end = block.end;
        let color_index = track
            .last_color_index
            .map_or(0, |c| (c + 1) % COLOR_PALETTE.len());
        track.last_color_index = Some(color_index);

        Placement {
            track_id: track.id,
            color: COLOR_PALETTE[color_index],
        }
    }

    /// Number of tracks opened so far.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Display labels for the opened tracks, in creation order.
    pub fn labels(&self) -> Vec<TrackLabel> {
        self.tracks
            .iter()
            .map(|t| TrackLabel {
                id: t.id,
                label: format!("Track {}", t.id),
            })
            .collect()
    }
}
