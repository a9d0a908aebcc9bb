use crate::core::Pipeline;
use crate::domain::model::SyncReport;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::monitor::SystemMonitor;

pub struct SyncEngine<P: Pipeline> {
    pipeline: P,
    #[cfg(feature = "cli")]
    monitor: SystemMonitor,
}

impl<P: Pipeline> SyncEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    #[cfg(feature = "cli")]
    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    #[cfg(not(feature = "cli"))]
    pub fn new_with_monitoring(pipeline: P, _monitor_enabled: bool) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<SyncReport> {
        tracing::info!("🚀 Starting leaderboard sync");

        // Extract
        let games = self.pipeline.extract().await?;
        tracing::info!("📥 Extracted {} game records", games.len());
        #[cfg(feature = "cli")]
        self.monitor.log_stats("Extract");

        // Transform
        let artifacts = self.pipeline.transform(games).await?;
        tracing::info!("🏆 Ranked {} players", artifacts.leaderboard.len());
        #[cfg(feature = "cli")]
        self.monitor.log_stats("Transform");

        let games_count = artifacts.games.len();
        let players_ranked = artifacts.leaderboard.len();

        // Load
        let outcome = self.pipeline.load(artifacts).await?;
        if outcome.is_unchanged() {
            tracing::info!("💤 Artifacts already up to date, nothing to write");
        } else {
            tracing::info!("📁 Updated artifacts: {}", outcome.changed_files.join(", "));
        }
        #[cfg(feature = "cli")]
        self.monitor.log_final_stats();

        Ok(SyncReport {
            games: games_count,
            players_ranked,
            changed_files: outcome.changed_files,
        })
    }
}
