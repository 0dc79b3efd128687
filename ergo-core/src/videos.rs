use crate::error::DashError;
use serde::{Deserialize, Serialize};

/// Prefix of catalog urls served from the local video directory.
pub const LOCAL_VIDEO_PREFIX: &str = "/videos/";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub name: String,
    pub url: String,
    pub description: String,
    pub available: bool,
}

impl VideoEntry {
    pub fn new(name: &str, url: &str, description: &str) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
            available: true,
        }
    }

    /// File name under the video directory, for entries served locally.
    pub fn local_file(&self) -> Option<&str> {
        self.url
            .strip_prefix(LOCAL_VIDEO_PREFIX)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoCatalog {
    entries: Vec<VideoEntry>,
}

impl VideoCatalog {
    pub fn new(entries: Vec<VideoEntry>) -> Result<Self, DashError> {
        if entries.is_empty() {
            return Err(DashError::EmptyCatalog);
        }
        Ok(Self { entries })
    }

    /// The built-in demo catalog.
    pub fn sample() -> Result<Self, DashError> {
        Self::new(vec![
            VideoEntry::new(
                "Sample Ergonomic Assessment 1",
                "https://www.w3schools.com/html/mov_bbb.mp4",
                "Proper sitting posture demonstration",
            ),
            VideoEntry::new(
                "Sample Ergonomic Assessment 2",
                "https://www.w3schools.com/html/movie.mp4",
                "Workspace setup best practices",
            ),
            VideoEntry::new(
                "Desk Stretch Routine",
                "/videos/desk-stretch.mp4",
                "Short stretching routine between long sitting sessions",
            ),
        ])
    }

    pub fn entries(&self) -> &[VideoEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&VideoEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn mark_unavailable(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.available = false;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoOption {
    pub index: usize,
    pub label: String,
}

pub fn video_options(catalog: &VideoCatalog) -> Vec<VideoOption> {
    catalog
        .entries()
        .iter()
        .enumerate()
        .map(|(index, v)| VideoOption {
            index,
            label: v.name.clone(),
        })
        .collect()
}

/// What the video panel shows for the current selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPanel {
    pub index: Option<usize>,
    pub name: String,
    pub url: String,
    pub description: String,
    pub available: bool,
    pub fallback: bool,
}

impl VideoPanel {
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_entry(index: usize, entry: &VideoEntry, fallback: bool) -> Self {
        Self {
            index: Some(index),
            name: entry.name.clone(),
            url: entry.url.clone(),
            description: entry.description.clone(),
            available: entry.available,
            fallback,
        }
    }
}

/// Unknown indices fall back to the first entry; an empty catalog yields an empty panel.
pub fn select_video(catalog: &VideoCatalog, index: usize) -> VideoPanel {
    if let Some(entry) = catalog.get(index) {
        return VideoPanel::from_entry(index, entry, false);
    }
    match catalog.get(0) {
        Some(first) => VideoPanel::from_entry(0, first, true),
        None => VideoPanel::empty(),
    }
}
