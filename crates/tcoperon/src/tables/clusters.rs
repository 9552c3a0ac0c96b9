//! Protein family to transport cluster index

use super::open_input;
use super::pair_index::PairIndex;
use std::io::Read;
use std::path::Path;
use tcoperon_common::Result;
use tracing::{debug, info};

/// Family → transport cluster
///
/// Input is tab-separated with a header row and columns
/// `[TransportCluster, Family, ...]`. A family listed under several clusters
/// belongs to the cluster on its last row.
#[derive(Debug, Clone, Default)]
pub struct FamilyToClusterIndex {
    inner: PairIndex,
}

impl FamilyToClusterIndex {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let index = Self::from_reader(open_input(path)?, path)?;

        info!(
            path = %path.display(),
            rows = index.inner.rows(),
            families = index.len(),
            "Loaded transport cluster to family mapping"
        );
        if index.inner.replaced() > 0 {
            debug!(replaced = index.inner.replaced(), "Families listed under several clusters, last row kept");
        }

        Ok(index)
    }

    pub fn from_reader<R: Read>(reader: R, source: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            inner: PairIndex::from_reader(reader, source.as_ref())?,
        })
    }

    /// Transport cluster a family belongs to
    pub fn get(&self, family: &str) -> Option<&str> {
        self.inner.get(family)
    }

    /// Number of families with a cluster
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_family_to_cluster() {
        let data = "tcluster\tfamily\nTC1\tTIGR001\nTC2\tCOG002\nTC2\tPF00005\n";
        let index = FamilyToClusterIndex::from_reader(data.as_bytes(), "tc.tsv").unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.get("TIGR001"), Some("TC1"));
        assert_eq!(index.get("PF00005"), Some("TC2"));
        assert_eq!(index.get("TC1"), None);
    }

    #[test]
    fn test_family_reassigned_to_later_cluster() {
        let data = "tcluster\tfamily\nTC1\tPF00005\nTC9\tPF00005\n";
        let index = FamilyToClusterIndex::from_reader(data.as_bytes(), "tc.tsv").unwrap();
        assert_eq!(index.get("PF00005"), Some("TC9"));
    }

    #[test]
    fn test_short_row_is_fatal() {
        let data = "tcluster\tfamily\nTC1\n";
        assert!(FamilyToClusterIndex::from_reader(data.as_bytes(), "tc.tsv").is_err());
    }
}
