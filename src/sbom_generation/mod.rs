/// Domain layer for SBOM merging
///
/// Pure business logic with no knowledge of processes, files, or consoles.
pub mod domain;
pub mod policies;
pub mod services;
