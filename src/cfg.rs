#[cfg(feature = "serde")]
use serde::Deserialize;

fn default_metadata_file() -> String {
    "meta.json".to_string()
}

fn default_ground_truth_prefix() -> String {
    "ground_truth".to_string()
}

fn default_strict_snapshot_length() -> bool {
    true
}

/// Dataset directory [Config]uration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Name of the metadata file, within the dataset directory
    #[cfg_attr(feature = "serde", serde(default = "default_metadata_file"))]
    pub metadata_file: String,
    /// Any file whose name starts with this prefix is a ground truth track (part).
    /// Parts are concatenated in file name order.
    #[cfg_attr(feature = "serde", serde(default = "default_ground_truth_prefix"))]
    pub ground_truth_prefix: String,
    /// When false, snapshot files longer than one snapshot are truncated
    /// to their first 6138 bytes, instead of being rejected.
    /// Shorter files are always rejected.
    #[cfg_attr(feature = "serde", serde(default = "default_strict_snapshot_length"))]
    pub strict_snapshot_length: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metadata_file: default_metadata_file(),
            ground_truth_prefix: default_ground_truth_prefix(),
            strict_snapshot_length: default_strict_snapshot_length(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with updated metadata file name
    pub fn with_metadata_file(&self, name: &str) -> Self {
        let mut s = self.clone();
        s.metadata_file = name.to_string();
        s
    }

    /// Copies and returns [Config] with updated ground truth file prefix
    pub fn with_ground_truth_prefix(&self, prefix: &str) -> Self {
        let mut s = self.clone();
        s.ground_truth_prefix = prefix.to_string();
        s
    }

    /// Copies and returns [Config] with relaxed snapshot length verification
    pub fn with_relaxed_snapshot_length(&self) -> Self {
        let mut s = self.clone();
        s.strict_snapshot_length = false;
        s
    }
}
