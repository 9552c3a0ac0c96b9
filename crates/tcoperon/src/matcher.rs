//! GI accession → transport cluster resolution

use crate::tables::Indices;
use std::collections::BTreeSet;
use tracing::trace;

/// Distinct transport clusters for one gene, in lexicographic order
pub type ClusterSet<'a> = BTreeSet<&'a str>;

/// Resolves GI accessions through GI → UniProt → families → clusters
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    indices: &'a Indices,
}

impl<'a> Matcher<'a> {
    pub fn new(indices: &'a Indices) -> Self {
        Self { indices }
    }

    /// Whether the GI accession has a UniProt mapping at all
    pub fn is_known(&self, gi: &str) -> bool {
        self.indices.gi_to_uniprot.contains(gi)
    }

    /// Transport clusters a GI accession resolves to
    ///
    /// Returns `None` when the GI has no UniProt mapping. A UniProt accession
    /// missing from the family table resolves like one with no families, and
    /// families without a cluster are skipped, so `Some` may hold an empty set.
    /// Callers treat an empty set the same as `None`.
    pub fn resolve(&self, gi: &str) -> Option<ClusterSet<'a>> {
        let indices = self.indices;
        let uniprot = indices.gi_to_uniprot.get(gi)?;

        let Some(families) = indices.uniprot_to_families.families(uniprot) else {
            trace!(gi, uniprot, "UniProt accession has no cross-reference row");
            return Some(ClusterSet::new());
        };

        let clusters: ClusterSet<'a> = families
            .iter()
            .filter_map(|family| indices.family_to_cluster.get(family))
            .collect();

        trace!(gi, uniprot, families = families.len(), clusters = clusters.len(), "Resolved GI");
        Some(clusters)
    }

    /// Non-empty cluster set for a GI accession, or `None`
    pub fn clusters(&self, gi: &str) -> Option<ClusterSet<'a>> {
        self.resolve(gi).filter(|clusters| !clusters.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::tables::{FamilyToClusterIndex, GiToUniprotIndex, KeyColumn, UniprotToFamilyIndex};

    fn indices(gi: &str, xref: &str, tc: &str) -> Indices {
        Indices {
            gi_to_uniprot: GiToUniprotIndex::from_reader(gi.as_bytes(), "gi.tsv").unwrap(),
            uniprot_to_families: UniprotToFamilyIndex::from_reader(
                xref.as_bytes(),
                "xref.tsv",
                KeyColumn::Skip,
            )
            .unwrap(),
            family_to_cluster: FamilyToClusterIndex::from_reader(tc.as_bytes(), "tc.tsv").unwrap(),
        }
    }

    fn fixture() -> Indices {
        indices(
            "Entry\tGI\nUNIPROT1\tGI1\nUNIPROT2\tGI2\nUNIPROT3\tGI3\nUNIPROT4\tGI4\n",
            "UNIPROT1\tTIGR001;COG002\nUNIPROT2\tPF999;\nUNIPROT3\tIPR000001;\n",
            "tcluster\tfamily\nTC1\tTIGR001\nTC2\tCOG002\n",
        )
    }

    #[test]
    fn test_resolves_through_all_tables() {
        let indices = fixture();
        let matcher = Matcher::new(&indices);

        let clusters = matcher.resolve("GI1").unwrap();
        assert_eq!(clusters.into_iter().collect::<Vec<_>>(), vec!["TC1", "TC2"]);
    }

    #[test]
    fn test_unknown_gi_is_not_found() {
        let indices = fixture();
        let matcher = Matcher::new(&indices);

        assert!(!matcher.is_known("GI404"));
        assert_eq!(matcher.resolve("GI404"), None);
        assert_eq!(matcher.clusters("GI404"), None);
    }

    #[test]
    fn test_family_without_cluster_resolves_empty() {
        let indices = fixture();
        let matcher = Matcher::new(&indices);

        assert!(matcher.is_known("GI2"));
        assert_eq!(matcher.resolve("GI2"), Some(ClusterSet::new()));
        assert_eq!(matcher.clusters("GI2"), None);
    }

    #[test]
    fn test_no_family_tokens_resolves_empty() {
        let indices = fixture();
        let matcher = Matcher::new(&indices);
        assert_eq!(matcher.resolve("GI3"), Some(ClusterSet::new()));
    }

    #[test]
    fn test_uniprot_missing_from_family_table_is_not_fatal() {
        let indices = fixture();
        let matcher = Matcher::new(&indices);
        assert_eq!(matcher.resolve("GI4"), Some(ClusterSet::new()));
    }

    #[test]
    fn test_duplicate_families_collapse_to_one_cluster() {
        let indices = indices(
            "Entry\tGI\nU1\tGI1\n",
            "U1\tPF00005;PF00005;\tPF00664;COG1132;\n",
            "tcluster\tfamily\nABC\tPF00005\nABC\tPF00664\nMFS\tCOG1132\n",
        );
        let matcher = Matcher::new(&indices);

        let clusters = matcher.clusters("GI1").unwrap();
        assert_eq!(clusters.len(), 2);
        assert!(clusters.contains("ABC"));
        assert!(clusters.contains("MFS"));
    }
}
