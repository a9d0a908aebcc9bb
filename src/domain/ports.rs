use crate::domain::model::{GameRecord, SyncArtifacts, SyncOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn players(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn time_class(&self) -> &str;
    fn win_points(&self) -> f64;
    fn draw_points(&self) -> f64;
    /// chess.com 要求 User-Agent 帶上聯絡方式
    fn user_agent(&self) -> String;

    fn timeout_seconds(&self) -> u64 {
        30
    }

    fn leaderboard_filename(&self) -> &str {
        "leaderboard.csv"
    }

    fn game_list_filename(&self) -> &str {
        "game_list.csv"
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<GameRecord>>;
    async fn transform(&self, games: Vec<GameRecord>) -> Result<SyncArtifacts>;
    async fn load(&self, artifacts: SyncArtifacts) -> Result<SyncOutcome>;
}
