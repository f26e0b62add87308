//! Persistent progression: the stored record, its storage, and the
//! completion rules that advance it.

pub mod engine;
pub mod record;
pub mod store;

pub use engine::{complete_level, is_game_completed, is_level_unlocked, LevelCompleteResult};
pub use record::{ProgressRecord, TransformationEvent};
pub use store::ProgressStore;
