use anyhow::Result;
use lofty::{Accessor, AudioFile, TaggedFileExt};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TrackInfo {
    pub title: String,
    pub artist: String,
    pub duration: Option<Duration>,
}

impl Default for TrackInfo {
    fn default() -> Self {
        Self {
            title: "Unknown".to_string(),
            artist: "Unknown".to_string(),
            duration: None,
        }
    }
}

pub fn read_metadata(path: &Path) -> Result<TrackInfo> {
    let mut info = TrackInfo::default();

    let tagged = lofty::read_from_path(path)?;
    let duration = tagged.properties().duration();
    // lofty reports zero when the container carries no length
    if !duration.is_zero() {
        info.duration = Some(duration);
    }

    if let Some(tag) = tagged.primary_tag() {
        if let Some(t) = tag.title() {
            info.title = t.to_string();
        }
        if let Some(a) = tag.artist() {
            info.artist = a.to_string();
        }
    }

    if info.title == "Unknown" {
        if let Some(name) = path.file_stem().and_then(|s| s.to_str()) {
            info.title = name.to_string();
        }
    }

    Ok(info)
}
