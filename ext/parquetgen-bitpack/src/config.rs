use serde::{Deserialize, Serialize};

/// Widest table built when nothing else is asked for
pub const DEFAULT_MAX_WIDTH: u8 = 3;

/// Settings for building a [`crate::BitPacker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitPackerConfig {
    /// Tables are built for every width in `1..=max_width`
    pub max_width: u8,
}

impl Default for BitPackerConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl BitPackerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_width(mut self, max_width: u8) -> Self {
        self.max_width = max_width;
        self
    }
}
