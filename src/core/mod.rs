pub mod chess_com;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{
    GameRecord, LeaderboardEntry, Outcome, SyncArtifacts, SyncOutcome, SyncReport,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
