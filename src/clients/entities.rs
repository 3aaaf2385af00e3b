#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
}

// Owner is kept so playlists merely followed by the user are never matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
}

/// Artist and track ids sent together in one recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedBundle {
    pub artists: Vec<String>,
    pub tracks: Vec<String>,
}

impl SeedBundle {
    pub fn len(&self) -> usize {
        self.artists.len() + self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty() && self.tracks.is_empty()
    }
}
