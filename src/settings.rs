use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use log::debug;
use rspotify::model::TimeRange;
use serde::Deserialize;

use crate::{
    clients::errors::{Error, Result},
    playlist::PlaylistTarget,
};

/// Combined artist + track seeds accepted by the recommendations endpoint.
pub const MAX_SEEDS: usize = 5;
/// Most tracks the recommendations endpoint returns for one request.
pub const MAX_RECOMMENDATIONS: u32 = 100;

const CONFIG_FILE: &str = ".config/sporand/sporand.yml";
const TOKEN_FILE: &str = ".local/share/spotify-tokens/sporand.json";
const PLAYLIST_NAME: &str = "sporand";
const PLAYLIST_DESCRIPTION: &str = "import random; random.choice(music)";
const SCOPES: [&str; 4] = [
    "playlist-modify-private",
    "playlist-read-private",
    "user-read-private",
    "user-top-read",
];
const TOP_ITEMS_LIMIT: u32 = 50;
const RECOMMENDATION_LIMIT: u32 = 20;

/// Everything a run needs to know up front.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_file: PathBuf,
    pub token_file: PathBuf,
    pub scopes: HashSet<String>,
    pub playlist: PlaylistTarget,
    pub seed_budget: usize,
    pub top_artists_range: Option<TimeRange>,
    // None leaves the range to the service default (medium term)
    pub top_tracks_range: Option<TimeRange>,
    pub top_items_limit: u32,
    pub recommendation_limit: u32,
}

impl Settings {
    /// Settings with every path resolved against `home`.
    pub fn with_home(home: &Path) -> Self {
        Settings {
            config_file: home.join(CONFIG_FILE),
            token_file: home.join(TOKEN_FILE),
            scopes: SCOPES.iter().map(ToString::to_string).collect(),
            playlist: PlaylistTarget {
                name: PLAYLIST_NAME.to_string(),
                description: PLAYLIST_DESCRIPTION.to_string(),
            },
            seed_budget: MAX_SEEDS,
            top_artists_range: Some(TimeRange::ShortTerm),
            top_tracks_range: None,
            top_items_limit: TOP_ITEMS_LIMIT,
            recommendation_limit: RECOMMENDATION_LIMIT,
        }
    }

    pub fn try_default() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            Error::ConfigurationError("Could not determine the home directory".into())
        })?;
        Ok(Self::with_home(&home))
    }

    /// Apply the optional overrides from the YAML config file.
    pub fn apply(&mut self, file: &FileConfig) -> Result<()> {
        if let Some(name) = &file.playlist_name {
            self.playlist.name.clone_from(name);
        }
        if let Some(description) = &file.playlist_description {
            self.playlist.description.clone_from(description);
        }
        if let Some(limit) = file.recommendation_limit {
            if !(1..=MAX_RECOMMENDATIONS).contains(&limit) {
                return Err(Error::ConfigurationError(format!(
                    "recommendation_limit must be within 1..={MAX_RECOMMENDATIONS}, got {limit}"
                )));
            }
            self.recommendation_limit = limit;
        }
        Ok(())
    }
}

/// Contents of `~/.config/sporand/sporand.yml`. Every key is optional;
/// credentials missing here are read from the `RSPOTIFY_*` environment.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub playlist_name: Option<String>,
    pub playlist_description: Option<String>,
    pub recommendation_limit: Option<u32>,
}

impl FileConfig {
    pub fn parse(contents: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to a mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    pub async fn load(path: &Path) -> Result<Self> {
        if !tokio::fs::try_exists(path).await? {
            debug!("No config file at {path:?}, relying on the environment");
            return Ok(Self::default());
        }
        let contents = tokio::fs::read_to_string(path).await?;
        debug!("Loaded config file from {path:?}");
        Self::parse(&contents)
    }
}
