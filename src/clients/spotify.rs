use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, warn};

use crate::clients::{
    entities::{Artist, Playlist, SeedBundle, Track, User},
    errors::{Error, Result},
    service::MusicService,
};
use crate::settings::{FileConfig, Settings};
use futures::stream::TryStreamExt;
use rspotify::{
    AuthCodeSpotify, Config, Credentials, OAuth,
    model::{
        ArtistId, FullArtist, FullPlaylist, FullTrack, PlayableId, PlayableItem, PlaylistId,
        PrivateUser, RecommendationsAttribute, SimplifiedPlaylist, SimplifiedTrack, TimeRange,
        TrackId, UserId,
    },
    prelude::*,
};

// The playlist endpoints accept at most this many items per request
const PLAYLIST_CHUNK_SIZE: usize = 100;

impl From<FullArtist> for Artist {
    fn from(f: FullArtist) -> Artist {
        Artist {
            id: f.id.id().to_string(),
            name: f.name,
        }
    }
}

impl From<PrivateUser> for User {
    fn from(u: PrivateUser) -> User {
        User {
            id: u.id.id().to_string(),
            display_name: u.display_name,
        }
    }
}

// The simplified listing carries no description; `playlist` fetches it
impl From<SimplifiedPlaylist> for Playlist {
    fn from(p: SimplifiedPlaylist) -> Playlist {
        Playlist {
            id: p.id.id().to_string(),
            name: p.name,
            description: None,
            owner_id: p.owner.id.id().to_string(),
        }
    }
}

impl From<FullPlaylist> for Playlist {
    fn from(p: FullPlaylist) -> Playlist {
        Playlist {
            id: p.id.id().to_string(),
            name: p.name,
            description: p.description,
            owner_id: p.owner.id.id().to_string(),
        }
    }
}

fn full_track(t: FullTrack) -> Option<Track> {
    let id = t.id?;
    Some(Track {
        id: id.id().to_string(),
        name: t.name,
    })
}

fn simplified_track(t: SimplifiedTrack) -> Option<Track> {
    let id = t.id?;
    Some(Track {
        id: id.id().to_string(),
        name: t.name,
    })
}

fn playable_ids(track_ids: &[String]) -> Result<Vec<PlayableId<'_>>> {
    track_ids
        .iter()
        .map(|id| Ok(PlayableId::Track(TrackId::from_id(id.as_str())?)))
        .collect()
}

pub struct SpotifyClient {
    pub spotify: AuthCodeSpotify,
}

impl SpotifyClient {
    // Build a client from the config file, falling back to RSPOTIFY_* environment variables
    pub async fn try_from_config(settings: &Settings, file: &FileConfig) -> Result<Self> {
        let creds = match (&file.client_id, &file.client_secret) {
            (Some(id), Some(secret)) => Credentials::new(id, secret),
            _ => Credentials::from_env().ok_or_else(|| {
                Error::ConfigurationError(format!(
                    "Missing Spotify credentials: set client_id and client_secret in {} or RSPOTIFY_CLIENT_ID and RSPOTIFY_CLIENT_SECRET",
                    settings.config_file.display()
                ))
            })?,
        };
        let redirect_uri = match &file.redirect_uri {
            Some(uri) => uri.clone(),
            None => std::env::var("RSPOTIFY_REDIRECT_URI").map_err(|_| {
                Error::ConfigurationError(format!(
                    "Missing Spotify redirect URI: set redirect_uri in {} or RSPOTIFY_REDIRECT_URI",
                    settings.config_file.display()
                ))
            })?,
        };
        let oauth = OAuth {
            redirect_uri,
            scopes: settings.scopes.clone(),
            ..Default::default()
        };

        // rspotify writes the cache file but won't create its directory
        if let Some(parent) = settings.token_file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let cache_path: PathBuf = settings.token_file.clone();
        debug!("Using Spotify token cache at {cache_path:?}");

        let spotify = AuthCodeSpotify::with_config(
            creds,
            oauth,
            Config {
                token_cached: true,
                token_refreshing: true,
                cache_path,
                ..Default::default()
            },
        );

        Ok(Self { spotify })
    }
}

#[async_trait(?Send)]
impl MusicService for SpotifyClient {
    // Reuses (and refreshes) the cached token; prompts via CLI only when there is none.
    // This function requires the `cli` feature enabled.
    async fn authenticate(&self) -> Result<()> {
        debug!("Starting Spotify authorization ...");
        let url = self.spotify.get_authorize_url(false)?;
        self.spotify.prompt_for_token(&url).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<User> {
        let user = self.spotify.me().await?;
        debug!("Authenticated as user: {:?}", user.display_name);
        Ok(User::from(user))
    }

    async fn user_playlists(&self, user_id: &str) -> Result<Vec<Playlist>> {
        let user_id = UserId::from_id(user_id)?;
        let simplified: Vec<SimplifiedPlaylist> =
            self.spotify.user_playlists(user_id).try_collect().await?;
        Ok(simplified.into_iter().map(Playlist::from).collect())
    }

    async fn playlist(&self, playlist_id: &str) -> Result<Playlist> {
        let playlist_id = PlaylistId::from_id(playlist_id)?;
        let playlist = self.spotify.playlist(playlist_id, None, None).await?;
        Ok(Playlist::from(playlist))
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<String>> {
        let playlist_id = PlaylistId::from_id(playlist_id)?;
        let items: Vec<_> = self
            .spotify
            .playlist_items(playlist_id, None, None)
            .try_collect()
            .await?;

        let mut ids = Vec::with_capacity(items.len());
        for item in items {
            match item.track {
                Some(PlayableItem::Track(FullTrack { id: Some(id), .. })) => {
                    ids.push(id.id().to_string());
                }
                Some(PlayableItem::Track(track)) => {
                    warn!("Skipping local track {:?} without an id", track.name);
                }
                _ => debug!("Skipping playlist item that isn't a track"),
            }
        }
        Ok(ids)
    }

    async fn remove_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        let playlist_id = PlaylistId::from_id(playlist_id)?;
        for chunk in track_ids.chunks(PLAYLIST_CHUNK_SIZE) {
            self.spotify
                .playlist_remove_all_occurrences_of_items(
                    playlist_id.clone(),
                    playable_ids(chunk)?,
                    None,
                )
                .await?;
        }
        Ok(())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
        collaborative: bool,
    ) -> Result<Playlist> {
        let user_id = UserId::from_id(user_id)?;
        let playlist = self
            .spotify
            .user_playlist_create(
                user_id,
                name,
                Some(public),
                Some(collaborative),
                Some(description),
            )
            .await?;
        Ok(Playlist::from(playlist))
    }

    async fn top_artists(&self, time_range: Option<TimeRange>, limit: u32) -> Result<Vec<Artist>> {
        let page = self
            .spotify
            .current_user_top_artists_manual(time_range, Some(limit), None)
            .await?;
        Ok(page.items.into_iter().map(Artist::from).collect())
    }

    async fn top_tracks(&self, time_range: Option<TimeRange>, limit: u32) -> Result<Vec<Track>> {
        let page = self
            .spotify
            .current_user_top_tracks_manual(time_range, Some(limit), None)
            .await?;
        Ok(page.items.into_iter().filter_map(full_track).collect())
    }

    async fn recommendations(&self, seeds: &SeedBundle, limit: u32) -> Result<Vec<Track>> {
        let artists = seeds
            .artists
            .iter()
            .map(|id| ArtistId::from_id(id.as_str()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let tracks = seeds
            .tracks
            .iter()
            .map(|id| TrackId::from_id(id.as_str()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let recommendations = self
            .spotify
            .recommendations(
                Vec::<RecommendationsAttribute>::new(),
                (!artists.is_empty()).then_some(artists),
                None::<Vec<&str>>,
                (!tracks.is_empty()).then_some(tracks),
                None,
                Some(limit),
            )
            .await?;

        Ok(recommendations
            .tracks
            .into_iter()
            .filter_map(simplified_track)
            .collect())
    }

    async fn add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        let playlist_id = PlaylistId::from_id(playlist_id)?;
        for chunk in track_ids.chunks(PLAYLIST_CHUNK_SIZE) {
            self.spotify
                .playlist_add_items(playlist_id.clone(), playable_ids(chunk)?, None)
                .await?;
        }
        Ok(())
    }
}

