use crate::album::Album;

/// Ordered, read-only list of albums.
///
/// Index `i` here is the same index the carousel tracks, so the catalog's
/// length is the carousel's item count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    albums: Vec<Album>,
}

impl Catalog {
    pub fn new(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    /// Built-in four-record collection (writing, coding, video, photo).
    pub fn sample() -> Self {
        Self::new(crate::sample::albums())
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Album> {
        self.albums.get(index)
    }

    /// Accent color of the album at `index`, if any.
    pub fn accent_color(&self, index: usize) -> Option<&str> {
        self.get(index).map(|album| album.color.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Album> {
        self.albums.iter()
    }
}

impl From<Vec<Album>> for Catalog {
    fn from(albums: Vec<Album>) -> Self {
        Self::new(albums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::album::AlbumKind;

    #[test]
    fn sample_catalog_covers_every_kind_in_order() {
        let catalog = Catalog::sample();
        let kinds: Vec<AlbumKind> = catalog.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, AlbumKind::ALL.to_vec());
        assert!(catalog.iter().all(|a| !a.tracks.is_empty()));
    }

    #[test]
    fn accent_color_follows_index() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.accent_color(1), Some("#002FA7"));
        assert_eq!(catalog.accent_color(catalog.len()), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn catalog_reads_cms_style_json() {
        let raw = r##"[
            {
                "id": "PHOTO",
                "title": "Exposures",
                "subtitle": "Photography Gallery",
                "color": "#00C2CB",
                "coverImage": "cover.png",
                "tracks": [
                    {
                        "id": "p1",
                        "title": "Architecture Study",
                        "date": "2023.12",
                        "description": "Lines and light.",
                        "imageUrl": "arch.png"
                    }
                ]
            }
        ]"##;
        let catalog: Catalog = serde_json::from_str(raw).unwrap();
        assert_eq!(catalog.len(), 1);
        let album = catalog.get(0).unwrap();
        assert_eq!(album.kind, AlbumKind::Photo);
        assert_eq!(album.tracks[0].image_url.as_deref(), Some("arch.png"));
        assert!(album.tracks[0].tags.is_empty());
    }
}
