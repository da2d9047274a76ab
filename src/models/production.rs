//! Production and episode input models.
//!
//! A production is a multi-phase unit of work (pre-production, shoot,
//! per-episode edit, weekly publish) supplied by the backlog loader.
//! Inputs are immutable for the duration of one scheduling run.
//!
//! # Input Ordering
//! The allocator requires productions sorted by desired shoot start
//! (nulls last, then id) and episodes sorted by `(sort_order, id)` with
//! absent sort orders first. Both orderings are explicit operations here
//! ([`sort_pending`], [`sort_episodes`]) rather than assumptions about
//! how the caller fetched the rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Episode classification. Only cornerstone and filler episodes
/// participate in scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeType {
    /// Flagship long-form episode.
    Cornerstone,
    /// Shorter companion episode published between cornerstones.
    Filler,
    /// Any other tag (shorts, trailers, ...); skipped by the scheduler.
    Other(String),
}

impl EpisodeType {
    /// Whether episodes of this type receive edit and publish blocks.
    pub fn is_schedulable(&self) -> bool {
        matches!(self, EpisodeType::Cornerstone | EpisodeType::Filler)
    }
}

/// A single episode within a production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Unique episode identifier.
    pub id: i64,
    /// Human-readable title.
    pub title: String,
    /// Position within the production. `None` sorts before any value.
    pub sort_order: Option<i64>,
    /// Episode classification.
    pub episode_type: EpisodeType,
}

impl Episode {
    /// Creates a new episode.
    pub fn new(id: i64, episode_type: EpisodeType) -> Self {
        Self {
            id,
            title: String::new(),
            sort_order: None,
            episode_type,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the position within the production.
    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = Some(sort_order);
        self
    }
}

/// A pending production to be scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Production {
    /// Unique production identifier.
    pub id: i64,
    /// Human-readable title.
    pub title: String,
    /// Desired first day of shooting. `None` = as soon as possible.
    pub target_shoot_start: Option<NaiveDate>,
    /// Desired last day of shooting. Carried for callers; the scheduler
    /// derives the shoot end from fixed phase durations instead.
    pub target_shoot_end: Option<NaiveDate>,
    /// Episodes belonging to this production.
    pub episodes: Vec<Episode>,
}

impl Production {
    /// Creates a new production with the given ID.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: String::new(),
            target_shoot_start: None,
            target_shoot_end: None,
            episodes: Vec::new(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the desired shoot start date.
    pub fn with_target_shoot_start(mut self, date: NaiveDate) -> Self {
        self.target_shoot_start = Some(date);
        self
    }

    /// Sets the desired shoot end date.
    pub fn with_target_shoot_end(mut self, date: NaiveDate) -> Self {
        self.target_shoot_end = Some(date);
        self
    }

    /// Adds an episode.
    pub fn with_episode(mut self, episode: Episode) -> Self {
        self.episodes.push(episode);
        self
    }

    /// Number of episodes (all types).
    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }

    /// Returns the episodes that participate in scheduling, ordered by
    /// `(sort_order, id)`.
    pub fn schedulable_episodes(&self) -> Vec<Episode> {
        let mut episodes: Vec<Episode> = self
            .episodes
            .iter()
            .filter(|e| e.episode_type.is_schedulable())
            .cloned()
            .collect();
        sort_episodes(&mut episodes);
        episodes
    }
}

/// Sorts productions into allocation order: desired shoot start
/// ascending with undated productions last, ties broken by id.
pub fn sort_pending(productions: &mut [Production]) {
    productions.sort_by_key(|p| (p.target_shoot_start.is_none(), p.target_shoot_start, p.id));
}

/// Sorts episodes by `(sort_order, id)`; absent sort orders first.
pub fn sort_episodes(episodes: &mut [Episode]) {
    episodes.sort_by_key(|e| (e.sort_order, e.id));
}

/// Earliest desired shoot start across the backlog, if any production
/// has one.
pub fn earliest_target_shoot_start(productions: &[Production]) -> Option<NaiveDate> {
    productions.iter().filter_map(|p| p.target_shoot_start).min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_production_builder() {
        let p = Production::new(7)
            .with_title("Desert Series")
            .with_target_shoot_start(d(2025, 6, 16))
            .with_target_shoot_end(d(2025, 6, 29))
            .with_episode(Episode::new(1, EpisodeType::Cornerstone).with_title("Ep 1"));

        assert_eq!(p.id, 7);
        assert_eq!(p.title, "Desert Series");
        assert_eq!(p.target_shoot_start, Some(d(2025, 6, 16)));
        assert_eq!(p.target_shoot_end, Some(d(2025, 6, 29)));
        assert_eq!(p.episode_count(), 1);
    }

    #[test]
    fn test_episode_type_schedulable() {
        assert!(EpisodeType::Cornerstone.is_schedulable());
        assert!(EpisodeType::Filler.is_schedulable());
        assert!(!EpisodeType::Other("short".into()).is_schedulable());
    }

    #[test]
    fn test_schedulable_episodes_filters_and_sorts() {
        let p = Production::new(1)
            .with_episode(
                Episode::new(30, EpisodeType::Filler).with_sort_order(2),
            )
            .with_episode(
                Episode::new(10, EpisodeType::Other("trailer".into())).with_sort_order(0),
            )
            .with_episode(
                Episode::new(20, EpisodeType::Cornerstone).with_sort_order(1),
            );

        let eps = p.schedulable_episodes();
        assert_eq!(eps.len(), 2);
        assert_eq!(eps[0].id, 20);
        assert_eq!(eps[1].id, 30);
    }

    #[test]
    fn test_sort_episodes_nulls_first() {
        let mut eps = vec![
            Episode::new(2, EpisodeType::Filler).with_sort_order(1),
            Episode::new(3, EpisodeType::Filler),
            Episode::new(1, EpisodeType::Filler),
        ];
        sort_episodes(&mut eps);
        // No sort_order sorts before any value; ties fall back to id
        assert_eq!(eps[0].id, 1);
        assert_eq!(eps[1].id, 3);
        assert_eq!(eps[2].id, 2);
    }

    #[test]
    fn test_sort_pending_nulls_last() {
        let mut productions = vec![
            Production::new(3),
            Production::new(2).with_target_shoot_start(d(2025, 8, 1)),
            Production::new(1).with_target_shoot_start(d(2025, 6, 1)),
        ];
        sort_pending(&mut productions);
        assert_eq!(productions[0].id, 1);
        assert_eq!(productions[1].id, 2);
        assert_eq!(productions[2].id, 3);
    }

    #[test]
    fn test_sort_pending_id_tiebreak() {
        let mut productions = vec![
            Production::new(9).with_target_shoot_start(d(2025, 6, 1)),
            Production::new(4).with_target_shoot_start(d(2025, 6, 1)),
        ];
        sort_pending(&mut productions);
        assert_eq!(productions[0].id, 4);
        assert_eq!(productions[1].id, 9);
    }

    #[test]
    fn test_earliest_target_shoot_start() {
        let productions = vec![
            Production::new(1),
            Production::new(2).with_target_shoot_start(d(2025, 7, 1)),
            Production::new(3).with_target_shoot_start(d(2025, 6, 16)),
        ];
        assert_eq!(
            earliest_target_shoot_start(&productions),
            Some(d(2025, 6, 16))
        );
        assert_eq!(earliest_target_shoot_start(&[Production::new(1)]), None);
    }
}
