//! container-sbom - consolidated SBOM generation for containerized applications
//!
//! This library builds container images, scans the source tree and each image
//! with an external inventory tool (Syft by default), and merges the resulting
//! CycloneDX documents into one deduplicated SBOM. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Documents, components, identity keys and the merger
//! - **Application Layer** (`application`): The pipeline use case, its services and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use container_sbom::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateSbomUseCase::new(
//!     SystemCommandRunner::new(),
//!     CycloneDxFormatter::new(),
//!     FileSystemWriter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = SbomRequest::builder()
//!     .final_image("shop:latest")
//!     .build_image("shop-build:latest")
//!     .build()?;
//! let response = use_case.execute(&request)?;
//! println!("{} components", response.component_count);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemWriter;
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::adapters::outbound::process::SystemCommandRunner;
    pub use crate::application::dto::{SbomRequest, SbomRequestBuilder, SbomResponse};
    pub use crate::application::use_cases::{GenerateSbomUseCase, PipelineStage};
    pub use crate::ports::outbound::{
        CommandOutput, CommandRunner, OutputPolicy, OutputWriter, ProgressReporter, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        BuildStep, CommandInvocation, Component, IdentityKey, ScanDocument, ScanTarget,
    };
    pub use crate::sbom_generation::policies::AnonymousComponentPolicy;
    pub use crate::sbom_generation::services::{DocumentMerger, MergedSbom};
    pub use crate::shared::Result;
}
