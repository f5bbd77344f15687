//! Core table types for merged controller mappings

use crate::platform::Platform;
use indexmap::IndexMap;

/// One controller's mapping line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRecord {
    /// Identifying key (the first comma-separated field)
    pub key: String,
    /// Full trimmed line, emitted verbatim
    pub line: String,
}

impl MappingRecord {
    /// Build a record from an already trimmed data line
    ///
    /// The key is everything before the first comma, or the whole line when
    /// there is no comma.
    pub fn from_line(line: impl Into<String>) -> Self {
        let line = line.into();
        let key = match line.split_once(',') {
            Some((key, _)) => key.to_string(),
            None => line.clone(),
        };
        Self { key, line }
    }
}

/// Outcome of inserting a record into a [`PlatformTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insert {
    /// The key was new for this platform
    Added,
    /// The key already existed; holds the record that was replaced
    Replaced(MappingRecord),
}

/// Records grouped by platform, both levels kept in first-insertion order
#[derive(Debug, Clone, Default)]
pub struct PlatformTable {
    platforms: IndexMap<Platform, IndexMap<String, MappingRecord>>,
}

impl PlatformTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a platform, appending it if it has not been seen yet
    pub fn ensure_platform(&mut self, platform: Platform) -> &mut IndexMap<String, MappingRecord> {
        self.platforms.entry(platform).or_default()
    }

    /// Insert a record under a platform
    ///
    /// A new key goes to the end of the platform's order. An existing key
    /// keeps its position and has its record replaced.
    pub fn insert(&mut self, platform: Platform, record: MappingRecord) -> Insert {
        let records = self.ensure_platform(platform);
        // IndexMap::insert on an existing key updates in place without reordering
        match records.insert(record.key.clone(), record) {
            Some(previous) => Insert::Replaced(previous),
            None => Insert::Added,
        }
    }

    /// Platforms in first-encountered order
    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.platforms.keys().copied()
    }

    /// Records for a platform in first-inserted order
    pub fn records(&self, platform: Platform) -> impl Iterator<Item = &MappingRecord> {
        self.platforms
            .get(&platform)
            .into_iter()
            .flat_map(|records| records.values())
    }

    /// Iterate over platforms and their records, in emission order
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &IndexMap<String, MappingRecord>)> {
        self.platforms.iter().map(|(p, records)| (*p, records))
    }

    /// Find a record by platform and key
    pub fn get(&self, platform: Platform, key: &str) -> Option<&MappingRecord> {
        self.platforms.get(&platform).and_then(|records| records.get(key))
    }

    /// Whether a platform header has been seen
    pub fn contains_platform(&self, platform: Platform) -> bool {
        self.platforms.contains_key(&platform)
    }

    /// Get the number of platforms
    pub fn platform_count(&self) -> usize {
        self.platforms.len()
    }

    /// Get the number of records across all platforms
    pub fn record_count(&self) -> usize {
        self.platforms.values().map(|records| records.len()).sum()
    }

    /// Whether no platform header has been seen
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
