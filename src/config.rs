use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_THINKING_DELAY_MS: u64 = 1000;
const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_name: String,
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Artificial pause before each reply; zero disables it
    pub thinking_delay: Duration,
    pub history_limit: usize,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }
}

impl Config {
    /// Builds the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_name = lookup("EDUBOT_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "EduBot".to_string());

        let thinking_delay_ms = lookup("EDUBOT_THINKING_DELAY_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_THINKING_DELAY_MS);

        let history_limit = lookup("EDUBOT_HISTORY_LIMIT")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_HISTORY_LIMIT);

        let log_file = lookup("EDUBOT_LOG_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs/edubot.log"));

        let window_title = format!("🎓 {} - Your Learning Companion", bot_name);

        Self {
            bot_name,
            window_title,
            window_width: 900.0,
            window_height: 700.0,
            thinking_delay: Duration::from_millis(thinking_delay_ms),
            history_limit,
            log_file,
        }
    }
}
