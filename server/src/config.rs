use anyhow::Result;
use platform_db::DatabaseSettings;

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    /// Empty means any origin may call the API.
    pub cors_allowed_origins: Vec<String>,
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let cors_allowed_origins =
            parse_origins(&std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());
        Ok(Self {
            cors_allowed_origins,
            database: DatabaseSettings::from_env()?,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://localhost:5173, ,https://hr.example.com,"),
            vec!["http://localhost:5173", "https://hr.example.com"]
        );
        assert!(parse_origins("").is_empty());
    }
}
