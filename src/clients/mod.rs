/// Data entities for artists, tracks, users and playlists
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// The remote operations a run depends on
pub mod service;
/// Spotify API client
pub mod spotify;

#[cfg(test)]
pub(crate) mod fake;

pub use service::MusicService;
pub use spotify::SpotifyClient;
