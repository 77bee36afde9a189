mod document_merger;

pub use document_merger::{DocumentMerger, MergedSbom};
