//! Roadmap domain models.
//!
//! Provides the input types supplied by the backlog loader
//! (`Production`, `Episode`) and the output types consumed by the
//! rendering layer (`ScheduledProduction`, `Roadmap`). Inputs are
//! immutable for one scheduling run; outputs are created once and
//! never mutated after emission.

mod production;
mod roadmap;

pub use production::{
    earliest_target_shoot_start, sort_episodes, sort_pending, Episode, EpisodeType, Production,
};
pub use roadmap::{DateRange, EditBlock, PublishBlock, Roadmap, ScheduledProduction, TrackLabel};
