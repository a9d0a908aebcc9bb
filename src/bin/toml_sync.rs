use chess_leaderboard::core::ConfigProvider;
use chess_leaderboard::utils::{logger, validation::Validate};
use chess_leaderboard::{LeaderboardPipeline, LocalStorage, SyncEngine, TomlConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-sync")]
#[command(about = "Leaderboard sync driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "leaderboard.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show what would be synced without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based leaderboard sync");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if args.dry_run {
        println!("🔍 Dry run - nothing will be fetched or written");
        println!("👥 Players: {}", config.players().join(", "));
        println!("♟️  Time class: {}", config.time_class());
        println!(
            "🎯 Scoring: win = {}, draw = {}",
            config.win_points(),
            config.draw_points()
        );
        println!(
            "📁 Output: {}/{{{}, {}}}",
            config.output_path(),
            config.leaderboard_filename(),
            config.game_list_filename()
        );
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = LeaderboardPipeline::new(storage, config);
    let engine = SyncEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            println!("✅ Leaderboard sync completed successfully!");
            if report.changed_files.is_empty() {
                println!("💤 No changes since the last run");
            } else {
                println!("📁 Updated: {}", report.changed_files.join(", "));
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Leaderboard sync failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
