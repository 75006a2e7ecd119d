use std::env;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FOOD_SYMPTOM_WINDOW: usize = 10;
pub const DEFAULT_EXERCISE_SYMPTOM_WINDOW: usize = 10;
pub const DEFAULT_MENTAL_SYMPTOM_WINDOW: usize = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub supabase_jwt_secret: String,
    pub port: u16,
    /// Number of most recent symptoms fed to the food rules.
    pub food_symptom_window: usize,
    /// Number of most recent symptoms fed to the exercise rules.
    pub exercise_symptom_window: usize,
    /// Number of most recent mental symptoms fed to the emotional rules.
    pub mental_symptom_window: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_URL not set, using empty value");
                    String::new()
                }),
            supabase_anon_key: env::var("SUPABASE_ANON_PUBLIC_KEY")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_ANON_PUBLIC_KEY not set, using empty value");
                    String::new()
                }),
            supabase_jwt_secret: env::var("SUPABASE_JWT_SECRET")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_JWT_SECRET not set, using empty value");
                    String::new()
                }),
            port: parse_or_default("PORT", DEFAULT_PORT),
            food_symptom_window: parse_or_default("FOOD_SYMPTOM_WINDOW", DEFAULT_FOOD_SYMPTOM_WINDOW),
            exercise_symptom_window: parse_or_default("EXERCISE_SYMPTOM_WINDOW", DEFAULT_EXERCISE_SYMPTOM_WINDOW),
            mental_symptom_window: parse_or_default("MENTAL_SYMPTOM_WINDOW", DEFAULT_MENTAL_SYMPTOM_WINDOW),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    /// Config pointing at the given base URL with default windows.
    pub fn with_database(supabase_url: &str, supabase_anon_key: &str, supabase_jwt_secret: &str) -> Self {
        Self {
            supabase_url: supabase_url.to_string(),
            supabase_anon_key: supabase_anon_key.to_string(),
            supabase_jwt_secret: supabase_jwt_secret.to_string(),
            port: DEFAULT_PORT,
            food_symptom_window: DEFAULT_FOOD_SYMPTOM_WINDOW,
            exercise_symptom_window: DEFAULT_EXERCISE_SYMPTOM_WINDOW,
            mental_symptom_window: DEFAULT_MENTAL_SYMPTOM_WINDOW,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty()
            && !self.supabase_anon_key.is_empty()
            && !self.supabase_jwt_secret.is_empty()
    }
}

fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
