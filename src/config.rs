use std::env;
use std::fmt;
use std::time::Duration;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DEFAULT_DATABASE: &str = "travel";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "{} must be set", var),
            ConfigError::Invalid { var, value } => {
                write!(f, "{} has an invalid value: {:?}", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Maximum generate+decode attempts for each generation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptLimits {
    pub country: u32,
    pub accommodations: u32,
    pub transportation: u32,
    pub activities: u32,
    pub itinerary: u32,
}

impl Default for AttemptLimits {
    fn default() -> Self {
        Self {
            country: 5,
            accommodations: 5,
            transportation: 3,
            activities: 10,
            itinerary: 20,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub mongo_database: String,
    pub llm: LlmConfig,
    pub google_maps_api_key: Option<String>,
    pub places_base_url: Option<String>,
    pub attempts: AttemptLimits,
    pub environment: String,
    pub cors_allow_any: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = AttemptLimits::default();

        let mongo_uri = optional("MONGODB_URI")
            .or_else(|| optional("MONGO_URI"))
            .ok_or(ConfigError::Missing("MONGODB_URI"))?;

        let llm = LlmConfig {
            api_key: optional("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?,
            base_url: optional("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            model: optional("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            timeout: Duration::from_secs(parsed("LLM_TIMEOUT_SECS", DEFAULT_LLM_TIMEOUT_SECS)?),
        };

        Ok(Self {
            host: optional("HOST").unwrap_or_else(|| HOST.to_string()),
            port: parsed("PORT", PORT)?,
            mongo_uri,
            mongo_database: optional("MONGODB_DATABASE")
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            llm,
            google_maps_api_key: optional("GOOGLE_MAPS_API_KEY"),
            places_base_url: optional("PLACES_BASE_URL"),
            attempts: AttemptLimits {
                country: parsed("COUNTRY_ATTEMPTS", defaults.country)?,
                accommodations: parsed("ACCOMMODATION_ATTEMPTS", defaults.accommodations)?,
                transportation: parsed("TRANSPORTATION_ATTEMPTS", defaults.transportation)?,
                activities: parsed("ACTIVITY_ATTEMPTS", defaults.activities)?,
                itinerary: parsed("ITINERARY_ATTEMPTS", defaults.itinerary)?,
            },
            environment: optional("RUST_ENV").unwrap_or_else(|| "development".to_string()),
            cors_allow_any: parsed("CORS_ALLOW_ANY", false)?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

// Empty values count as unset.
fn optional(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parsed<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match optional(var) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}
