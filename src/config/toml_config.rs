use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.chess.com/pub";
pub const DEFAULT_TIME_CLASS: &str = "daily";
pub const DEFAULT_WIN_POINTS: f64 = 3.0;
pub const DEFAULT_DRAW_POINTS: f64 = 1.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: Option<JobConfig>,
    pub leaderboard: LeaderboardConfig,
    pub source: Option<SourceConfig>,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    pub players: Vec<String>,
    pub time_class: Option<String>,
    pub win_points: Option<f64>,
    pub draw_points: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub api_base: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub leaderboard_file: Option<String>,
    pub game_list_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base(&self) -> &str {
        self.source
            .as_ref()
            .and_then(|s| s.api_base.as_deref())
            .unwrap_or(DEFAULT_API_BASE)
    }

    fn players(&self) -> &[String] {
        &self.leaderboard.players
    }

    fn output_path(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.path.as_deref())
            .unwrap_or(".")
    }

    fn time_class(&self) -> &str {
        self.leaderboard
            .time_class
            .as_deref()
            .unwrap_or(DEFAULT_TIME_CLASS)
    }

    fn win_points(&self) -> f64 {
        self.leaderboard.win_points.unwrap_or(DEFAULT_WIN_POINTS)
    }

    fn draw_points(&self) -> f64 {
        self.leaderboard.draw_points.unwrap_or(DEFAULT_DRAW_POINTS)
    }

    fn user_agent(&self) -> String {
        let contact = self.source.as_ref().and_then(|s| s.contact.as_deref());
        match contact {
            Some(contact) => format!(
                "chess-leaderboard/{} ({})",
                env!("CARGO_PKG_VERSION"),
                contact
            ),
            None => format!("chess-leaderboard/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    fn timeout_seconds(&self) -> u64 {
        self.source
            .as_ref()
            .and_then(|s| s.timeout_seconds)
            .unwrap_or(30)
    }

    fn leaderboard_filename(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.leaderboard_file.as_deref())
            .unwrap_or("leaderboard.csv")
    }

    fn game_list_filename(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.game_list_file.as_deref())
            .unwrap_or("game_list.csv")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_players("leaderboard.players", &self.leaderboard.players)?;
        validation::validate_url("source.api_base", self.api_base())?;
        validation::validate_path("output.path", self.output_path())?;
        validation::validate_non_empty_string("leaderboard.time_class", self.time_class())?;
        validation::validate_non_negative("leaderboard.win_points", self.win_points())?;
        validation::validate_non_negative("leaderboard.draw_points", self.draw_points())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config_with_defaults() {
        let config: TomlConfig = toml::from_str(
            r#"
            [leaderboard]
            players = ["alice", "bob"]
            "#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
        assert_eq!(config.time_class(), "daily");
        assert_eq!(config.win_points(), 3.0);
        assert_eq!(config.draw_points(), 1.0);
        assert_eq!(config.leaderboard_filename(), "leaderboard.csv");
        assert_eq!(config.game_list_filename(), "game_list.csv");
    }

    #[test]
    fn parses_full_config() {
        let config: TomlConfig = toml::from_str(
            r#"
            [job]
            name = "club-leaderboard"
            description = "Weekend club standings"

            [leaderboard]
            players = ["alice", "bob", "carol"]
            time_class = "rapid"
            win_points = 1.0
            draw_points = 0.5

            [source]
            api_base = "https://api.chess.com/pub"
            timeout_seconds = 10
            contact = "club@example.com"

            [output]
            path = "./data"
            leaderboard_file = "standings.csv"
            game_list_file = "games.csv"

            [monitoring]
            enabled = true
            "#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.time_class(), "rapid");
        assert_eq!(config.win_points(), 1.0);
        assert_eq!(config.draw_points(), 0.5);
        assert_eq!(config.timeout_seconds(), 10);
        assert_eq!(config.leaderboard_filename(), "standings.csv");
        assert!(config.monitoring_enabled());
        assert!(config.user_agent().contains("club@example.com"));
    }

    #[test]
    fn missing_players_is_a_parse_error() {
        let parsed: std::result::Result<TomlConfig, _> = toml::from_str("[leaderboard]\n");
        assert!(parsed.is_err());
    }
}
