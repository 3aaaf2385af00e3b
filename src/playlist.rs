use log::{debug, info};

use crate::clients::{
    entities::{Playlist, User},
    errors::Result,
    service::MusicService,
};

/// Name and description identifying the playlist a run refills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistTarget {
    pub name: String,
    pub description: String,
}

impl PlaylistTarget {
    fn is_candidate(&self, playlist: &Playlist, user: &User) -> bool {
        playlist.owner_id == user.id && playlist.name == self.name
    }

    fn describes(&self, playlist: &Playlist) -> bool {
        playlist.description.as_deref() == Some(self.description.as_str())
    }
}

/// Find the user's target playlist and empty it, or create it when it
/// doesn't exist yet. Returns the playlist id.
pub async fn resolve_playlist<S: MusicService + ?Sized>(
    service: &S,
    user: &User,
    target: &PlaylistTarget,
) -> Result<String> {
    if let Some(existing) = find_playlist(service, user, target).await? {
        info!("Reusing playlist {:?} ({})", existing.name, existing.id);
        truncate_playlist(service, &existing.id).await?;
        return Ok(existing.id);
    }

    let created = service
        .create_playlist(&user.id, &target.name, &target.description, false, false)
        .await?;
    info!("Created playlist {:?} ({})", created.name, created.id);
    Ok(created.id)
}

/// Look up the user's own playlist matching both name and description.
pub async fn find_playlist<S: MusicService + ?Sized>(
    service: &S,
    user: &User,
    target: &PlaylistTarget,
) -> Result<Option<Playlist>> {
    let playlists = service.user_playlists(&user.id).await?;
    debug!("User {} has {} playlists", user.id, playlists.len());

    for candidate in playlists.into_iter().filter(|p| target.is_candidate(p, user)) {
        let candidate = match candidate.description {
            Some(_) => candidate,
            None => service.playlist(&candidate.id).await?,
        };
        if target.describes(&candidate) {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

/// Remove every track from a playlist. Does nothing for an empty playlist.
pub async fn truncate_playlist<S: MusicService + ?Sized>(
    service: &S,
    playlist_id: &str,
) -> Result<()> {
    let track_ids = service.playlist_tracks(playlist_id).await?;
    if track_ids.is_empty() {
        debug!("Playlist {playlist_id} is already empty");
        return Ok(());
    }
    service.remove_tracks(playlist_id, &track_ids).await?;
    debug!("Removed {} tracks from playlist {playlist_id}", track_ids.len());
    Ok(())
}
