use std::fmt::{self, Display, Formatter};

/// Content category an album stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum AlbumKind {
    /// Essays and articles
    Writing,
    /// Development projects
    Coding,
    /// Motion and film
    Video,
    /// Photography
    Photo,
}

impl AlbumKind {
    /// All kinds in collection order.
    pub const ALL: [Self; 4] =
        [Self::Writing, Self::Coding, Self::Video, Self::Photo];
}

impl Display for AlbumKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AlbumKind::Writing => write!(f, "WRITING"),
            AlbumKind::Coding => write!(f, "CODING"),
            AlbumKind::Video => write!(f, "VIDEO"),
            AlbumKind::Photo => write!(f, "PHOTO"),
        }
    }
}

/// A single project listed inside an album's detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProjectItem {
    pub id: String,
    pub title: String,
    /// Free-form display date, e.g. `2023.11`
    pub date: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub link: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: Option<String>,
}

/// One record in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Album {
    #[cfg_attr(feature = "serde", serde(rename = "id"))]
    pub kind: AlbumKind,
    pub title: String,
    pub subtitle: String,
    /// Hex accent color, e.g. `#002FA7`
    pub color: String,
    pub cover_image: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tracks: Vec<ProjectItem>,
}

impl Album {
    /// Number of project items listed on this album.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}
