use serde::{Deserialize, Serialize};

/// 單場對局的結果，以該列 player 的視角記錄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// 將 chess.com API 的 result 字串分類為勝/和/負。
    /// 未知的結束原因（例如 abandoned）回傳 None，該局不列入統計。
    pub fn from_api_result(result: &str) -> Option<Self> {
        match result {
            "win" => Some(Outcome::Win),
            "checkmated" | "timeout" | "resigned" | "lose" => Some(Outcome::Loss),
            "stalemate" => Some(Outcome::Draw),
            r if r.contains("draw") => Some(Outcome::Draw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Draw => "draw",
            Outcome::Loss => "loss",
        }
    }
}

/// 一場已完成的對局。抓取後不再修改，只存在於單次執行的記憶體中。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub player: String,
    pub opponent: String,
    pub outcome: Outcome,
    /// 對局結束時間（unix 秒）
    pub end_time: i64,
    pub url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl PlayerStats {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    pub fn points(&self, win_points: f64, draw_points: f64) -> f64 {
        f64::from(self.wins) * win_points + f64::from(self.draws) * draw_points
    }
}

/// 排行榜中的一列，rank 從 1 開始
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub player: String,
    pub games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: f64,
}

/// Transform 階段的產物：排行與對局清單，加上已在記憶體中渲染完成的兩份 CSV
#[derive(Debug, Clone)]
pub struct SyncArtifacts {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub games: Vec<GameRecord>,
    pub leaderboard_csv: Vec<u8>,
    pub game_list_csv: Vec<u8>,
}

/// Load 階段回報：哪些檔案內容有變動（byte-level diff）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub changed_files: Vec<String>,
}

impl SyncOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.changed_files.is_empty()
    }
}

/// 引擎執行結束後的摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub games: usize,
    pub players_ranked: usize,
    pub changed_files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_win_results() {
        assert_eq!(Outcome::from_api_result("win"), Some(Outcome::Win));
    }

    #[test]
    fn classifies_loss_results() {
        for r in ["checkmated", "timeout", "resigned", "lose"] {
            assert_eq!(Outcome::from_api_result(r), Some(Outcome::Loss), "{}", r);
        }
    }

    #[test]
    fn classifies_draw_results() {
        // 帶 draw 字樣或 stalemate 視為和局
        for r in ["stalemate", "draw", "drawagreed", "timevsdraw"] {
            assert_eq!(Outcome::from_api_result(r), Some(Outcome::Draw), "{}", r);
        }
    }

    #[test]
    fn unknown_results_are_skipped() {
        assert_eq!(Outcome::from_api_result("abandoned"), None);
        assert_eq!(Outcome::from_api_result(""), None);
    }

    #[test]
    fn stats_accumulate_and_score() {
        let mut stats = PlayerStats::default();
        stats.record(Outcome::Win);
        stats.record(Outcome::Win);
        stats.record(Outcome::Draw);
        stats.record(Outcome::Loss);

        assert_eq!(stats.games(), 4);
        assert_eq!(stats.points(3.0, 1.0), 7.0);
        assert_eq!(stats.points(1.0, 0.5), 2.5);
    }
}
