// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{ControlsKind, LabelSource, SceneConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "constellation")]
#[command(about = "Words orbiting a glowing question among the stars", long_about = None)]
pub struct Cli {
    /// Hide the diagnostics overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// JSON scene config; missing sections keep their defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of orbiting words
    #[arg(long)]
    pub count: Option<usize>,

    /// Where word labels come from
    #[arg(long, value_enum)]
    pub words: Option<LabelSource>,

    /// Camera controls once the intro zoom ends
    #[arg(long, value_enum)]
    pub controls: Option<ControlsKind>,

    /// Seed for words, stars and cloud
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Load the config file (or defaults) and apply command-line overrides
    pub fn scene_config(&self) -> Result<SceneConfig> {
        let mut config = match &self.config {
            Some(path) => {
                log::info!("Loading scene config from {:?}", path);
                SceneConfig::load(path)?
            }
            None => SceneConfig::default(),
        };

        if let Some(count) = self.count {
            config.words.count = count;
        }
        if let Some(source) = self.words {
            config.words.source = source;
        }
        if let Some(kind) = self.controls {
            config.controls.kind = kind;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}
