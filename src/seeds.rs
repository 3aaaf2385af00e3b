use log::debug;
use rand::Rng;

use crate::{
    clients::{
        entities::SeedBundle,
        errors::{Error, Result},
    },
    sampler::sample,
};

/// Split `budget` seeds between artists and tracks at random and sample
/// both sides. At least one artist is always picked.
pub fn select_seeds<R: Rng>(
    rng: &mut R,
    budget: usize,
    artists: &[String],
    tracks: &[String],
) -> Result<SeedBundle> {
    if budget == 0 {
        return Err(Error::InvalidSeedCount { count: 0, budget });
    }
    let artist_count = rng.random_range(1..=budget);
    select_seeds_with_artist_count(rng, artist_count, budget, artists, tracks)
}

/// Sample `artist_count` artists and `budget - artist_count` tracks.
///
/// When one side has too few candidates the split is shifted towards the
/// other side, so the bundle still holds exactly `budget` seeds. Errors only
/// when there are no artists at all or fewer candidates than `budget`.
pub fn select_seeds_with_artist_count<R: Rng>(
    rng: &mut R,
    artist_count: usize,
    budget: usize,
    artists: &[String],
    tracks: &[String],
) -> Result<SeedBundle> {
    if artist_count == 0 || artist_count > budget {
        return Err(Error::InvalidSeedCount {
            count: artist_count,
            budget,
        });
    }
    if artists.is_empty() {
        return Err(Error::InsufficientCandidates {
            kind: "top artists",
            requested: 1,
            available: 0,
        });
    }
    let available = artists.len() + tracks.len();
    if available < budget {
        return Err(Error::InsufficientCandidates {
            kind: "top artists and tracks",
            requested: budget,
            available,
        });
    }

    let mut artist_count = artist_count.min(artists.len());
    let mut track_count = budget - artist_count;
    if track_count > tracks.len() {
        track_count = tracks.len();
        artist_count = budget - track_count;
    }
    debug!("Using {artist_count} artist seeds and {track_count} track seeds");

    Ok(SeedBundle {
        artists: sample(rng, artists, artist_count, "top artists")?,
        tracks: sample(rng, tracks, track_count, "top tracks")?,
    })
}
