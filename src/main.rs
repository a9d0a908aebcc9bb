use chess_leaderboard::utils::{logger, validation::Validate};
use chess_leaderboard::{CliConfig, LeaderboardPipeline, LocalStorage, SyncEngine};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_scheduler_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting chess-leaderboard sync");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = LeaderboardPipeline::new(storage, config);

    let engine = SyncEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Leaderboard sync completed successfully!");
            println!("✅ Leaderboard sync completed successfully!");
            println!(
                "🏆 {} players ranked from {} game records",
                report.players_ranked, report.games
            );
            if report.changed_files.is_empty() {
                println!("💤 No changes since the last run");
            } else {
                println!("📁 Updated: {}", report.changed_files.join(", "));
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Leaderboard sync failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 排程器只需要知道這輪失敗了;下一輪會重新抓取
            let exit_code = match e.severity() {
                chess_leaderboard::utils::error::ErrorSeverity::Low => 0,
                chess_leaderboard::utils::error::ErrorSeverity::Medium => 2,
                chess_leaderboard::utils::error::ErrorSeverity::High => 1,
                chess_leaderboard::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
