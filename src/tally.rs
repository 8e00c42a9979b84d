use ahash::AHashMap;

/// Count of visited entries per lowercase extension. The empty key holds
/// extensionless entries, directories included.
#[derive(Debug, Default, Clone)]
pub struct ExtensionTally {
    counts: AHashMap<String, usize>,
}

/// One row of the ranked report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub extension: String,
    pub count: usize,
}

impl ExtensionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, extension: &str) {
        match self.counts.get_mut(extension) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(extension.to_string(), 1);
            }
        }
    }

    pub fn get(&self, extension: &str) -> usize {
        self.counts.get(extension).copied().unwrap_or(0)
    }

    /// Number of distinct extensions seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(ext, count)| (ext.as_str(), *count))
    }

    /// Entries by count, highest first. Order among equal counts is unspecified.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let mut ranked: Vec<RankedEntry> = self
            .iter()
            .map(|(extension, count)| RankedEntry {
                extension: extension.to_string(),
                count,
            })
            .collect();
        ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}
