//! Spawn coordinates - absolute pixels or percent-of-container.
//!
//! Percent coordinates are resolved exactly once, against the container size
//! at attach time. They are never re-resolved on resize; a body spawned at
//! "50%" keeps its absolute pixel position if the container grows later.

use serde::Deserialize;

/// One spawn coordinate along a single axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpawnCoord {
    /// Absolute pixel offset from the container origin.
    Px(f32),
    /// Percentage of the container extent along this axis (0.0..=100.0).
    Percent(f32),
}

impl SpawnCoord {
    /// Parse host-supplied text: `"50%"` is a percentage, anything else is
    /// pixels. Malformed input degrades to 0 px rather than failing - a body
    /// at the origin beats no body at all.
    pub fn from_text(s: &str) -> Self {
        let s = s.trim();
        if let Some(pct) = s.strip_suffix('%') {
            SpawnCoord::Percent(pct.trim().parse().unwrap_or(0.0))
        } else {
            SpawnCoord::Px(s.parse().unwrap_or(0.0))
        }
    }

    /// Resolve against the container extent along this axis.
    pub fn resolve(self, max: f32) -> f32 {
        match self {
            SpawnCoord::Px(v) => v,
            SpawnCoord::Percent(p) => (p / 100.0) * max,
        }
    }
}

impl Default for SpawnCoord {
    fn default() -> Self {
        SpawnCoord::Px(0.0)
    }
}

// The wire format accepts either a bare number (pixels) or a string
// ("120", "50%"), matching what the host page passes through untouched.
impl<'de> Deserialize<'de> for SpawnCoord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(f32),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Num(v) => SpawnCoord::Px(v),
            Raw::Text(s) => SpawnCoord::from_text(&s),
        })
    }
}
