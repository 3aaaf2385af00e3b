use std::collections::HashMap;

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use crate::clients::{
    entities::SeedBundle,
    errors::Result,
    service::MusicService,
    spotify::SpotifyClient,
};
use crate::playlist::resolve_playlist;
use crate::sampler::unique;
use crate::seeds::select_seeds;
use crate::settings::{FileConfig, Settings};

// Configuration for the Generator struct
pub struct Config<S> {
    pub service: S,
    pub settings: Settings,
}

#[derive(Default)]
pub struct ConfigBuilder {}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {}
    }

    // Settings resolve paths against the home directory, then take the config file overrides
    pub async fn build(self) -> Result<Config<SpotifyClient>> {
        let mut settings = Settings::try_default()?;
        let file = FileConfig::load(&settings.config_file).await?;
        settings.apply(&file)?;

        let service = SpotifyClient::try_from_config(&settings, &file).await?;
        Ok(Config { service, settings })
    }
}

/// What a successful run did to the playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub playlist_id: String,
    pub seeds: SeedBundle,
    pub added: usize,
}

// Runs one refresh of the playlist, start to finish
pub struct Generator<S> {
    config: Config<S>,
    rng: StdRng,
}

impl<S: MusicService> Generator<S> {
    pub fn new(config: Config<S>) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    pub fn with_rng(config: Config<S>, rng: StdRng) -> Self {
        Generator { config, rng }
    }

    /// Authenticate, pick seeds from the user's top items, ask for
    /// recommendations and put them into the target playlist.
    ///
    /// Any failure stops the run. If adding tracks fails, the playlist is
    /// left empty.
    pub async fn generate(&mut self) -> Result<GenerationReport> {
        let service = &self.config.service;
        let settings = &self.config.settings;

        info!("Authorizing client ...");
        service.authenticate().await?;

        debug!("Fetching top artists and tracks ...");
        let top_artists = service
            .top_artists(settings.top_artists_range, settings.top_items_limit)
            .await?;
        let artist_ids = unique(&top_artists.iter().map(|a| a.id.clone()).collect::<Vec<_>>());
        let top_tracks = service
            .top_tracks(settings.top_tracks_range, settings.top_items_limit)
            .await?;
        let track_ids = unique(&top_tracks.iter().map(|t| t.id.clone()).collect::<Vec<_>>());
        debug!(
            "Fetched {} top artists and {} top tracks",
            artist_ids.len(),
            track_ids.len()
        );

        let seeds = select_seeds(&mut self.rng, settings.seed_budget, &artist_ids, &track_ids)?;
        let artist_names: HashMap<&str, &str> = top_artists
            .iter()
            .map(|a| (a.id.as_str(), a.name.as_str()))
            .collect();
        let track_names: HashMap<&str, &str> = top_tracks
            .iter()
            .map(|t| (t.id.as_str(), t.name.as_str()))
            .collect();
        info!(
            "Seeding recommendations with artists {:?} and tracks {:?}",
            names_of(&seeds.artists, &artist_names),
            names_of(&seeds.tracks, &track_names)
        );

        let recommended = service
            .recommendations(&seeds, settings.recommendation_limit)
            .await?;
        debug!(
            "Received {} recommendations: {:?}",
            recommended.len(),
            recommended.iter().map(|t| t.name.as_str()).collect::<Vec<_>>()
        );
        let recommended_ids: Vec<String> = recommended.into_iter().map(|t| t.id).collect();

        let user = service.current_user().await?;
        debug!(
            "Refreshing playlist for {}",
            user.display_name.as_deref().unwrap_or(&user.id)
        );
        let playlist_id = resolve_playlist(service, &user, &settings.playlist).await?;

        if recommended_ids.is_empty() {
            info!("No recommendations returned, playlist {playlist_id} stays empty");
        } else {
            service.add_tracks(&playlist_id, &recommended_ids).await?;
        }

        info!(
            "Playlist {playlist_id} refreshed with {} tracks",
            recommended_ids.len()
        );
        Ok(GenerationReport {
            playlist_id,
            seeds,
            added: recommended_ids.len(),
        })
    }
}

// Display names for the given ids, falling back to the id itself
fn names_of<'a>(ids: &'a [String], names: &HashMap<&str, &'a str>) -> Vec<&'a str> {
    ids.iter()
        .map(|id| names.get(id.as_str()).copied().unwrap_or(id.as_str()))
        .collect()
}
