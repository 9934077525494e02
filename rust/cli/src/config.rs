use serde::{Deserialize, Serialize};
use std::fs;

use showdown_engine::game::DEFAULT_OPPONENTS;
use showdown_engine::record::RecordFormat;

/// Largest table a single 52-card deck can serve: 23 players need 46 hole cards
/// plus a 5-card board.
pub const MAX_OPPONENTS: usize = 22;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub games: u64,
    pub opponents: usize,
    pub format: RecordFormat,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub games: ValueSource,
    pub opponents: ValueSource,
    pub format: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            games: ValueSource::Default,
            opponents: ValueSource::Default,
            format: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            games: 1_000,
            opponents: DEFAULT_OPPONENTS,
            format: RecordFormat::Csv,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `SHOWDOWN_CONFIG`, then
/// `SHOWDOWN_*` environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SHOWDOWN_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.games {
            cfg.games = v;
            sources.games = ValueSource::File;
        }
        if let Some(v) = f.opponents {
            cfg.opponents = v;
            sources.opponents = ValueSource::File;
        }
        if let Some(v) = f.format {
            cfg.format = parse_format(&v)?;
            sources.format = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("SHOWDOWN_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(games) = std::env::var("SHOWDOWN_GAMES")
        && !games.is_empty()
    {
        cfg.games = games
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid games".into()))?;
        sources.games = ValueSource::Env;
    }
    if let Ok(opp) = std::env::var("SHOWDOWN_OPPONENTS")
        && !opp.is_empty()
    {
        cfg.opponents = opp
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid opponents".into()))?;
        sources.opponents = ValueSource::Env;
    }
    if let Ok(format) = std::env::var("SHOWDOWN_FORMAT")
        && !format.is_empty()
    {
        cfg.format = parse_format(&format)?;
        sources.format = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    games: Option<u64>,
    #[serde(default)]
    opponents: Option<usize>,
    #[serde(default)]
    format: Option<String>,
}

fn parse_format(s: &str) -> Result<RecordFormat, ConfigError> {
    RecordFormat::parse(s).ok_or_else(|| ConfigError::Invalid(format!("Invalid format: {}", s)))
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.games == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: games must be >=1".into(),
        ));
    }
    validate_opponents(cfg.opponents)
}

pub fn validate_opponents(opponents: usize) -> Result<(), ConfigError> {
    if !(1..=MAX_OPPONENTS).contains(&opponents) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: opponents must be between 1 and {}",
            MAX_OPPONENTS
        )));
    }
    Ok(())
}
