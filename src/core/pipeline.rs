use crate::core::chess_com::ChessComClient;
use crate::core::{ConfigProvider, GameRecord, LeaderboardEntry, Pipeline, Storage};
use crate::domain::model::{Outcome, PlayerStats, SyncArtifacts, SyncOutcome};
use crate::utils::error::{Result, SyncError};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::Duration;

pub struct LeaderboardPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> LeaderboardPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// 統計用 key 是小寫帳號，輸出時換回設定檔裡的原始拼法
    fn display_name(&self, normalized: &str) -> String {
        self.config
            .players()
            .iter()
            .map(|p| p.trim())
            .find(|p| p.to_lowercase() == normalized)
            .map(str::to_string)
            .unwrap_or_else(|| normalized.to_string())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for LeaderboardPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<GameRecord>> {
        let client = ChessComClient::new(
            self.config.api_base(),
            &self.config.user_agent(),
            Duration::from_secs(self.config.timeout_seconds()),
        )?;

        let roster: Vec<String> = self
            .config
            .players()
            .iter()
            .map(|p| p.trim().to_lowercase())
            .collect();
        let time_class = self.config.time_class();
        let mut records = Vec::new();

        for player in &roster {
            let archives = client.fetch_archives(player).await?;

            for archive_url in &archives {
                // 單一 archive 抓不到就跳過，其他 archive 照常處理
                let games = match client.fetch_games(archive_url).await {
                    Ok(games) => games,
                    Err(e) => {
                        tracing::warn!("Failed to fetch from {}: {}", archive_url, e);
                        continue;
                    }
                };

                for game in games {
                    if game.time_class != time_class {
                        continue;
                    }

                    let white = game.white.username.to_lowercase();
                    let black = game.black.username.to_lowercase();
                    if *player != white && *player != black {
                        continue;
                    }

                    let (opponent, own_result) = if *player == white {
                        (black, game.white.result)
                    } else {
                        (white, game.black.result)
                    };

                    // 只統計名單內玩家之間的對局
                    if opponent == *player || !roster.contains(&opponent) {
                        continue;
                    }

                    let Some(outcome) = Outcome::from_api_result(&own_result) else {
                        continue;
                    };

                    records.push(GameRecord {
                        player: player.clone(),
                        opponent,
                        outcome,
                        end_time: game.end_time,
                        url: game.url,
                    });
                }
            }
        }

        Ok(records)
    }

    async fn transform(&self, games: Vec<GameRecord>) -> Result<SyncArtifacts> {
        let win_points = self.config.win_points();
        let draw_points = self.config.draw_points();

        let mut stats: HashMap<String, PlayerStats> = HashMap::new();
        for game in &games {
            stats.entry(game.player.clone()).or_default().record(game.outcome);
        }

        let mut leaderboard: Vec<LeaderboardEntry> = stats
            .into_iter()
            .map(|(player, s)| LeaderboardEntry {
                rank: 0,
                player: self.display_name(&player),
                games: s.games(),
                wins: s.wins,
                draws: s.draws,
                losses: s.losses,
                points: s.points(win_points, draw_points),
            })
            .collect();

        // 積分由高到低，同分以帳號名稱排序，保證每次執行產出一致
        leaderboard.sort_by(|a, b| {
            b.points
                .partial_cmp(&a.points)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.player.to_lowercase().cmp(&b.player.to_lowercase()))
        });
        for (i, entry) in leaderboard.iter_mut().enumerate() {
            entry.rank = i + 1;
        }

        let mut games = games;
        games.sort_by_key(|g| g.end_time);

        let leaderboard_csv = render_leaderboard_csv(&leaderboard, win_points, draw_points)?;
        let game_list_csv = render_game_list_csv(&games)?;

        Ok(SyncArtifacts {
            leaderboard,
            games,
            leaderboard_csv,
            game_list_csv,
        })
    }

    async fn load(&self, artifacts: SyncArtifacts) -> Result<SyncOutcome> {
        let mut changed_files = Vec::new();
        let targets = [
            (
                self.config.leaderboard_filename(),
                &artifacts.leaderboard_csv,
            ),
            (self.config.game_list_filename(), &artifacts.game_list_csv),
        ];

        for (filename, data) in targets {
            // 和現有檔案逐 byte 比對，內容相同就不重寫
            let unchanged = match self.storage.read_file(filename).await {
                Ok(existing) => existing == *data,
                Err(_) => false,
            };

            if unchanged {
                tracing::debug!("{} unchanged, skipping write", filename);
                continue;
            }

            self.storage.write_file(filename, data).await?;
            tracing::info!("Saved {}", filename);
            changed_files.push(filename.to_string());
        }

        Ok(SyncOutcome { changed_files })
    }
}

fn format_points(points: f64) -> String {
    if points.fract() == 0.0 && points.abs() < 1e15 {
        format!("{}", points as i64)
    } else {
        format!("{}", points)
    }
}

fn format_date(end_time: i64) -> String {
    chrono::DateTime::from_timestamp(end_time, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn render_leaderboard_csv(
    entries: &[LeaderboardEntry],
    win_points: f64,
    draw_points: f64,
) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(["Player", "Games", "Wins", "Draws", "Losses", "Points"])?;
    for entry in entries {
        writer.write_record([
            entry.player.clone(),
            entry.games.to_string(),
            entry.wins.to_string(),
            entry.draws.to_string(),
            entry.losses.to_string(),
            format_points(entry.points),
        ])?;
    }

    writer.write_record(["Legend"])?;
    writer.write_record([
        format!("Win = {} points", format_points(win_points)),
        format!("Draw = {} points", format_points(draw_points)),
    ])?;

    writer.into_inner().map_err(|e| SyncError::ProcessingError {
        message: format!("Failed to flush leaderboard CSV buffer: {}", e),
    })
}

fn render_game_list_csv(games: &[GameRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["Date", "Player", "Opponent", "Outcome", "Game URL"])?;
    for game in games {
        writer.write_record([
            format_date(game.end_time),
            game.player.clone(),
            game.opponent.clone(),
            game.outcome.as_str().to_string(),
            game.url.clone(),
        ])?;
    }

    writer.into_inner().map_err(|e| SyncError::ProcessingError {
        message: format!("Failed to flush game list CSV buffer: {}", e),
    })
}
