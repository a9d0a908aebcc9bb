use crate::utils::error::Result;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// chess.com 公開 API 的回應模型。欄位缺漏時以預設值處理，
/// 不完整的對局會在分類階段被濾掉。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSide {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub result: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiGame {
    #[serde(default)]
    pub white: ApiSide,
    #[serde(default)]
    pub black: ApiSide,
    #[serde(default)]
    pub time_class: String,
    #[serde(default)]
    pub end_time: i64,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct ArchivesResponse {
    #[serde(default)]
    archives: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ArchiveGamesResponse {
    #[serde(default)]
    games: Vec<ApiGame>,
}

pub struct ChessComClient {
    client: Client,
    api_base: String,
}

impl ChessComClient {
    pub fn new(api_base: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// 取得玩家的月度 archive URL 清單。
    /// 403 代表隱私設定擋住了公開查詢，回傳空清單讓這位玩家不貢獻任何對局。
    pub async fn fetch_archives(&self, username: &str) -> Result<Vec<String>> {
        let url = format!("{}/player/{}/games/archives", self.api_base, username);
        tracing::info!("Fetching archives for {}", username);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::FORBIDDEN {
            tracing::warn!(
                "Access denied for {} (403). Check privacy settings.",
                username
            );
            return Ok(Vec::new());
        }

        let body: ArchivesResponse = response.error_for_status()?.json().await?;
        Ok(body.archives)
    }

    pub async fn fetch_games(&self, archive_url: &str) -> Result<Vec<ApiGame>> {
        tracing::info!("Fetching games from {}", archive_url);

        let response = self.client.get(archive_url).send().await?;
        let body: ArchiveGamesResponse = response.error_for_status()?.json().await?;
        Ok(body.games)
    }
}
