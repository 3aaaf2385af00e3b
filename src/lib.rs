//! Sporand - refill a Spotify playlist with fresh recommendations
//!
//! Each run samples the user's top artists and tracks as seeds, asks Spotify
//! for recommendations and replaces the contents of a well-known playlist
//! with them.

/// Client modules for interacting with the music service
pub mod clients;
/// Runs the whole refresh, start to finish
pub mod generator;
/// Finding, creating and emptying the target playlist
pub mod playlist;
/// Random sampling without replacement
pub mod sampler;
/// Splitting the seed budget between artists and tracks
pub mod seeds;
/// Paths, constants and the YAML config file
pub mod settings;
