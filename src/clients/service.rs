use async_trait::async_trait;
use rspotify::model::TimeRange;

use crate::clients::{
    entities::{Artist, Playlist, SeedBundle, Track, User},
    errors::Result,
};

/// Remote operations a playlist refresh needs from the music service.
///
/// `SpotifyClient` is the production implementation. Every call is awaited in
/// sequence by the generator, so implementations don't need to be `Send`.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait MusicService {
    /// Make sure the client holds a valid token, prompting the user if needed.
    async fn authenticate(&self) -> Result<()>;

    async fn current_user(&self) -> Result<User>;

    /// Every playlist in the user's library, all pages included. The
    /// description may be missing from these summaries.
    async fn user_playlists(&self, user_id: &str) -> Result<Vec<Playlist>>;

    async fn playlist(&self, playlist_id: &str) -> Result<Playlist>;

    /// Ids of the tracks in a playlist. Items without an id (local files,
    /// episodes) are left out.
    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<String>>;

    async fn remove_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<()>;

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
        collaborative: bool,
    ) -> Result<Playlist>;

    async fn top_artists(&self, time_range: Option<TimeRange>, limit: u32) -> Result<Vec<Artist>>;

    async fn top_tracks(&self, time_range: Option<TimeRange>, limit: u32) -> Result<Vec<Track>>;

    async fn recommendations(&self, seeds: &SeedBundle, limit: u32) -> Result<Vec<Track>>;

    async fn add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<()>;
}
