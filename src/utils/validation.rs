use crate::utils::error::{Result, SyncError};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SyncError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SyncError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SyncError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SyncError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SyncError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 至少要兩位玩家才有對局可比，重複（忽略大小寫）視為設定錯誤
pub fn validate_players(field_name: &str, players: &[String]) -> Result<()> {
    if players.len() < 2 {
        return Err(SyncError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: players.join(","),
            reason: "At least two players are required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for player in players {
        let normalized = player.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(SyncError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: player.clone(),
                reason: "Player name cannot be empty".to_string(),
            });
        }
        if !seen.insert(normalized) {
            return Err(SyncError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: player.clone(),
                reason: "Duplicate player name".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SyncError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SyncError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_urls() {
        assert!(validate_url("api_base", "https://api.chess.com/pub").is_ok());
        assert!(validate_url("api_base", "http://localhost:8080").is_ok());
    }

    #[test]
    fn rejects_bad_urls() {
        assert!(validate_url("api_base", "").is_err());
        assert!(validate_url("api_base", "ftp://example.com").is_err());
        assert!(validate_url("api_base", "not a url").is_err());
    }

    #[test]
    fn requires_two_distinct_players() {
        let one = vec!["alice".to_string()];
        assert!(validate_players("players", &one).is_err());

        let dup = vec!["alice".to_string(), "Alice".to_string()];
        assert!(validate_players("players", &dup).is_err());

        let ok = vec!["alice".to_string(), "bob".to_string()];
        assert!(validate_players("players", &ok).is_ok());
    }

    #[test]
    fn rejects_negative_points() {
        assert!(validate_non_negative("win_points", -1.0).is_err());
        assert!(validate_non_negative("win_points", f64::NAN).is_err());
        assert!(validate_non_negative("win_points", 0.5).is_ok());
    }
}
