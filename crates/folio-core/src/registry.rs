//! Static list of media entries shown in the scene.

use fnv::FnvHashMap;
use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub id: String,
    /// Opaque handle understood by whoever decodes the media.
    pub source: String,
    pub title: String,
    pub description: String,
    /// Width over height. Zero when unknown.
    pub aspect_ratio: f32,
}

impl MediaItem {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        aspect_ratio: f32,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            title: title.into(),
            description: description.into(),
            aspect_ratio,
        }
    }

    /// Aspect ratio if it is usable for sizing.
    #[inline]
    pub fn known_aspect(&self) -> Option<f32> {
        (self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0).then_some(self.aspect_ratio)
    }

    /// Caption text revealed under the focused item.
    pub fn caption(&self) -> String {
        format!("{}\n{}", self.title, self.description)
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate media id `{0}`")]
    DuplicateId(String),
    #[error("media entry {0} has an empty id")]
    EmptyId(usize),
    #[error("malformed media json: {0}")]
    Json(#[from] serde_json::Error),
}

/// One entry of the JSON document embedded in the page.
#[derive(Debug, Deserialize)]
struct RawEntry {
    id: String,
    url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    width: Option<f32>,
    height: Option<f32>,
}

impl From<RawEntry> for MediaItem {
    fn from(raw: RawEntry) -> Self {
        let aspect_ratio = match (raw.width, raw.height) {
            (Some(w), Some(h)) if h > 0.0 => w / h,
            _ => 0.0,
        };
        MediaItem::new(raw.id, raw.url, raw.title, raw.description, aspect_ratio)
    }
}

/// Immutable, ordered collection of media items with id lookup.
#[derive(Clone, Debug, Default)]
pub struct MediaRegistry {
    items: Vec<MediaItem>,
    index: FnvHashMap<String, usize>,
}

impl MediaRegistry {
    pub fn new(items: Vec<MediaItem>) -> Result<Self, RegistryError> {
        let mut index = FnvHashMap::default();
        for (i, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(RegistryError::EmptyId(i));
            }
            if index.insert(item.id.clone(), i).is_some() {
                return Err(RegistryError::DuplicateId(item.id.clone()));
            }
            if item.known_aspect().is_none() {
                log::warn!("[registry] `{}` has no usable aspect ratio", item.id);
            }
        }
        Ok(Self { items, index })
    }

    /// Parse the `[{id, url, title, description, width, height}]` format.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        Self::new(raw.into_iter().map(MediaItem::from).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }
}

/// The compiled-in portfolio.
pub fn default_registry() -> MediaRegistry {
    const WIDE: f32 = 16.0 / 9.0;
    let items = vec![
        MediaItem::new(
            "kollateral",
            "/kollateral.mp4",
            "Kollateral",
            "An exploration of digital landscapes and their collateral effects on perception.",
            WIDE,
        ),
        MediaItem::new(
            "export",
            "/export.mp4",
            "Export",
            "The process of translating a three-dimensional concept into a two-dimensional reality.",
            WIDE,
        ),
        MediaItem::new(
            "forum",
            "/forum.mp4",
            "Forum",
            "A visual dialogue between structure and chaos, representing modern digital discourse.",
            WIDE,
        ),
        MediaItem::new(
            "export2",
            "/export2.mp4",
            "Export II",
            "A continued study in form and motion, rendered through a new visual lens.",
            WIDE,
        ),
        MediaItem::new(
            "videocitta",
            "/videocitta.mp4",
            "Video Città",
            "The city as a canvas; a moving portrait of urban life and digital intervention.",
            1.0,
        ),
        MediaItem::new(
            "hardwaredystopia1",
            "/hardwaredystopia1.mp4",
            "Hardware Dystopia I",
            "The machine aesthetic in a state of decay, questioning the promise of technology.",
            WIDE,
        ),
        MediaItem::new(
            "hardwaredystopia2",
            "/hardwaredystopia2.mp4",
            "Hardware Dystopia II",
            "Fragmented memories of a digital past, reassembled into a coherent warning.",
            WIDE,
        ),
        MediaItem::new(
            "hardwaredystopia3",
            "/hardwaredystopia3.mp4",
            "Hardware Dystopia III",
            "The final transmission from a world consumed by its own technological ambition.",
            WIDE,
        ),
    ];
    // Ids above are unique literals
    match MediaRegistry::new(items) {
        Ok(r) => r,
        Err(e) => {
            log::error!("[registry] default registry rejected: {e}");
            MediaRegistry::default()
        }
    }
}
