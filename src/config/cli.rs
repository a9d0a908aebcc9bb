use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "chess-leaderboard")]
#[command(about = "Sync a chess.com leaderboard into CSV artifacts")]
pub struct CliConfig {
    /// chess.com usernames to track, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub players: Vec<String>,

    #[arg(long, default_value = "https://api.chess.com/pub")]
    pub api_base: String,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    /// Only games of this time class are counted
    #[arg(long, default_value = "daily")]
    pub time_class: String,

    #[arg(long, default_value = "3")]
    pub win_points: f64,

    #[arg(long, default_value = "1")]
    pub draw_points: f64,

    /// Contact address folded into the User-Agent header, as the chess.com API asks
    #[arg(long)]
    pub contact: Option<String>,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit JSON logs for CI log collectors")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn players(&self) -> &[String] {
        &self.players
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn time_class(&self) -> &str {
        &self.time_class
    }

    fn win_points(&self) -> f64 {
        self.win_points
    }

    fn draw_points(&self) -> f64 {
        self.draw_points
    }

    fn user_agent(&self) -> String {
        match &self.contact {
            Some(contact) => format!(
                "chess-leaderboard/{} ({})",
                env!("CARGO_PKG_VERSION"),
                contact
            ),
            None => format!("chess-leaderboard/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_players("players", &self.players)?;
        validation::validate_url("api_base", &self.api_base)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("time_class", &self.time_class)?;
        validation::validate_non_negative("win_points", self.win_points)?;
        validation::validate_non_negative("draw_points", self.draw_points)?;
        Ok(())
    }
}
