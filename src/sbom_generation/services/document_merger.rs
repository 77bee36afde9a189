use crate::sbom_generation::domain::{IdentityKey, ScanDocument};
use crate::sbom_generation::policies::AnonymousComponentPolicy;
use std::collections::HashSet;

/// Result of merging scan documents
#[derive(Debug, Clone, PartialEq)]
pub struct MergedSbom {
    document: ScanDocument,
    input_components: usize,
}

impl MergedSbom {
    pub fn document(&self) -> &ScanDocument {
        &self.document
    }

    pub fn component_count(&self) -> usize {
        self.document.component_count()
    }

    /// Number of components dropped as duplicates
    pub fn duplicates_dropped(&self) -> usize {
        self.input_components - self.component_count()
    }
}

/// DocumentMerger service for combining scan documents into one SBOM
///
/// The first document is the base: its metadata is carried over verbatim.
/// Components from every document are visited in document-then-component
/// order and kept only on the first occurrence of their identity key.
/// Duplicates are dropped whole, there is no field-level merge.
pub struct DocumentMerger {
    policy: AnonymousComponentPolicy,
}

impl DocumentMerger {
    pub fn new(policy: AnonymousComponentPolicy) -> Self {
        Self { policy }
    }

    /// Merges documents in order; an empty input yields an empty document
    pub fn merge(&self, documents: Vec<ScanDocument>) -> MergedSbom {
        let mut documents = documents.into_iter();
        let Some(mut base) = documents.next() else {
            return MergedSbom {
                document: ScanDocument::default(),
                input_components: 0,
            };
        };

        let base_components = base.take_components();
        let all_components = base_components
            .into_iter()
            .chain(documents.flat_map(ScanDocument::into_components));

        let mut seen: HashSet<IdentityKey> = HashSet::new();
        let mut components = Vec::new();
        let mut input_components = 0;

        for (position, component) in all_components.enumerate() {
            input_components += 1;
            let key = self.policy.resolve(IdentityKey::of(&component), position);
            if seen.insert(key) {
                components.push(component);
            }
        }

        MergedSbom {
            document: base.with_components(components),
            input_components,
        }
    }
}

impl Default for DocumentMerger {
    fn default() -> Self {
        Self::new(AnonymousComponentPolicy::default())
    }
}
