//! In-memory `MusicService` used by the unit tests.

use std::cell::RefCell;

use async_trait::async_trait;
use rspotify::{ClientError, model::TimeRange};

use crate::clients::{
    entities::{Artist, Playlist, SeedBundle, Track, User},
    errors::{Error, Result},
    service::MusicService,
};

#[derive(Debug, Clone)]
pub struct FakePlaylist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
    pub public: bool,
    pub collaborative: bool,
    pub tracks: Vec<String>,
}

#[derive(Default)]
struct State {
    playlists: Vec<FakePlaylist>,
    top_artists: Vec<Artist>,
    top_tracks: Vec<Track>,
    recommendations: Vec<Track>,
    last_seeds: Option<SeedBundle>,
    failing: Option<&'static str>,
    hide_descriptions: bool,
    calls: Vec<&'static str>,
    next_id: usize,
}

pub struct FakeService {
    user_id: String,
    state: RefCell<State>,
}

impl FakeService {
    pub fn new(user_id: &str) -> Self {
        FakeService {
            user_id: user_id.to_string(),
            state: RefCell::new(State::default()),
        }
    }

    pub fn with_top_items(self, artists: &[&str], tracks: &[&str]) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.top_artists = artists
                .iter()
                .map(|id| Artist {
                    id: (*id).to_string(),
                    name: format!("Artist {id}"),
                })
                .collect();
            state.top_tracks = tracks.iter().map(|id| track(id)).collect();
        }
        self
    }

    pub fn with_recommendations(self, tracks: &[&str]) -> Self {
        self.state.borrow_mut().recommendations = tracks.iter().map(|id| track(id)).collect();
        self
    }

    /// List playlists without descriptions, the way Spotify's listing does.
    pub fn without_listed_descriptions(self) -> Self {
        self.state.borrow_mut().hide_descriptions = true;
        self
    }

    /// Make the named operation fail with a transport error.
    pub fn failing_on(self, operation: &'static str) -> Self {
        self.state.borrow_mut().failing = Some(operation);
        self
    }

    pub fn add_playlist(
        &self,
        owner_id: &str,
        name: &str,
        description: Option<&str>,
        tracks: &[&str],
    ) -> String {
        let mut state = self.state.borrow_mut();
        let id = next_id(&mut state);
        state.playlists.push(FakePlaylist {
            id: id.clone(),
            name: name.to_string(),
            description: description.map(ToString::to_string),
            owner_id: owner_id.to_string(),
            public: false,
            collaborative: false,
            tracks: tracks.iter().map(|t| (*t).to_string()).collect(),
        });
        id
    }

    pub fn playlists(&self) -> Vec<FakePlaylist> {
        self.state.borrow().playlists.clone()
    }

    pub fn tracks_of(&self, playlist_id: &str) -> Vec<String> {
        self.state
            .borrow()
            .playlists
            .iter()
            .find(|p| p.id == playlist_id)
            .map(|p| p.tracks.clone())
            .unwrap_or_default()
    }

    pub fn last_seeds(&self) -> Option<SeedBundle> {
        self.state.borrow().last_seeds.clone()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.borrow().calls.clone()
    }

    pub fn calls_to(&self, operation: &str) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| **c == operation)
            .count()
    }

    fn record(&self, operation: &'static str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(operation);
        if state.failing == Some(operation) {
            let err = std::io::Error::other(format!("{operation} failed"));
            return Err(Error::SpotifyError(ClientError::from(err)));
        }
        Ok(())
    }

    fn with_playlist<T>(
        &self,
        playlist_id: &str,
        f: impl FnOnce(&mut FakePlaylist) -> T,
    ) -> Result<T> {
        let mut state = self.state.borrow_mut();
        let playlist = state
            .playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| {
                let err = std::io::Error::other(format!("no playlist {playlist_id}"));
                Error::SpotifyError(ClientError::from(err))
            })?;
        Ok(f(playlist))
    }
}

fn track(id: &str) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {id}"),
    }
}

fn next_id(state: &mut State) -> String {
    state.next_id += 1;
    format!("playlist{}", state.next_id)
}

fn summary(playlist: &FakePlaylist) -> Playlist {
    Playlist {
        id: playlist.id.clone(),
        name: playlist.name.clone(),
        description: playlist.description.clone(),
        owner_id: playlist.owner_id.clone(),
    }
}

#[async_trait(?Send)]
impl MusicService for FakeService {
    async fn authenticate(&self) -> Result<()> {
        self.record("authenticate")
    }

    async fn current_user(&self) -> Result<User> {
        self.record("current_user")?;
        Ok(User {
            id: self.user_id.clone(),
            display_name: None,
        })
    }

    async fn user_playlists(&self, _user_id: &str) -> Result<Vec<Playlist>> {
        self.record("user_playlists")?;
        let state = self.state.borrow();
        Ok(state
            .playlists
            .iter()
            .map(|p| Playlist {
                description: if state.hide_descriptions {
                    None
                } else {
                    p.description.clone()
                },
                ..summary(p)
            })
            .collect())
    }

    async fn playlist(&self, playlist_id: &str) -> Result<Playlist> {
        self.record("playlist")?;
        self.with_playlist(playlist_id, |p| summary(p))
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<String>> {
        self.record("playlist_tracks")?;
        self.with_playlist(playlist_id, |p| p.tracks.clone())
    }

    async fn remove_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        self.record("remove_tracks")?;
        self.with_playlist(playlist_id, |p| p.tracks.retain(|t| !track_ids.contains(t)))
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
        collaborative: bool,
    ) -> Result<Playlist> {
        self.record("create_playlist")?;
        let mut state = self.state.borrow_mut();
        let playlist = FakePlaylist {
            id: next_id(&mut state),
            name: name.to_string(),
            description: Some(description.to_string()),
            owner_id: user_id.to_string(),
            public,
            collaborative,
            tracks: Vec::new(),
        };
        let created = summary(&playlist);
        state.playlists.push(playlist);
        Ok(created)
    }

    async fn top_artists(&self, _time_range: Option<TimeRange>, limit: u32) -> Result<Vec<Artist>> {
        self.record("top_artists")?;
        let state = self.state.borrow();
        Ok(state.top_artists.iter().take(limit as usize).cloned().collect())
    }

    async fn top_tracks(&self, _time_range: Option<TimeRange>, limit: u32) -> Result<Vec<Track>> {
        self.record("top_tracks")?;
        let state = self.state.borrow();
        Ok(state.top_tracks.iter().take(limit as usize).cloned().collect())
    }

    async fn recommendations(&self, seeds: &SeedBundle, limit: u32) -> Result<Vec<Track>> {
        self.record("recommendations")?;
        let mut state = self.state.borrow_mut();
        state.last_seeds = Some(seeds.clone());
        Ok(state
            .recommendations
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        self.record("add_tracks")?;
        self.with_playlist(playlist_id, |p| p.tracks.extend_from_slice(track_ids))
    }
}
