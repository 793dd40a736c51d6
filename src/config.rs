use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::hashtags::RecommenderConfig;
use crate::scoring::{EngagementWeights, SentimentWeights};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub sentiment: SentimentWeights,
    pub engagement: EngagementWeights,
    pub recommender: RecommenderConfig,
}

impl EngineConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                EngineConfig::default()
            }
        } else {
            EngineConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(span) = env::var("CAPTION_JITTER_SPAN") {
            if let Ok(value) = span.parse::<f64>() {
                self.recommender.jitter_span = value;
            }
        }
        if let Ok(weight) = env::var("CAPTION_BIGRAM_WEIGHT") {
            if let Ok(value) = weight.parse::<f64>() {
                self.recommender.bigram_weight = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("CAPTION_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/engine.toml")))
}
