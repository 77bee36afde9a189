/// Use cases module containing application business logic orchestration
mod generate_sbom;

pub use generate_sbom::{GenerateSbomUseCase, PipelineStage};
