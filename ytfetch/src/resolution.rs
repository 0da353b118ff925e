//! Available video resolutions derived from a probe.

use crate::engine::Probe;
use std::collections::BTreeMap;
use ytfetch_dl::dl::MediaFormat;

/// Chosen resolution: the matching format id and its height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub format_id: String,
    pub height: u32,
}

/// Format id → height, for formats that report a height.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionMap(BTreeMap<String, u32>);

/// Human-readable label for a height, e.g. `1080p`.
pub fn label(height: u32) -> String {
    format!("{height}p")
}

impl ResolutionMap {
    pub fn from_formats(formats: &[MediaFormat]) -> Self {
        formats
            .iter()
            .filter_map(|f| f.height.map(|h| (f.format_id.clone(), h)))
            .collect()
    }

    /// Resolutions of a single item, or of the first entry of a playlist.
    pub fn from_probe(probe: &Probe) -> Self {
        match probe {
            Probe::Single(item) => Self::from_formats(&item.formats),
            Probe::Playlist { entries, .. } => entries
                .first()
                .map(|first| Self::from_formats(&first.formats))
                .unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Distinct labels, tallest first.
    pub fn labels(&self) -> Vec<String> {
        let mut heights: Vec<u32> = self.0.values().copied().collect();
        heights.sort_unstable_by(|a, b| b.cmp(a));
        heights.dedup();
        heights.into_iter().map(label).collect()
    }

    /// Look up a label exactly as shown by [`labels`](Self::labels).
    pub fn find(&self, wanted: &str) -> Option<Selection> {
        self.0
            .iter()
            .find(|(_, h)| label(**h) == wanted)
            .map(|(id, h)| Selection {
                format_id: id.clone(),
                height: *h,
            })
    }
}

impl FromIterator<(String, u32)> for ResolutionMap {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
