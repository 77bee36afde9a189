/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod sbom_request;
mod sbom_response;

pub use sbom_request::{
    SbomRequest, SbomRequestBuilder, DEFAULT_BUILD_IMAGE, DEFAULT_BUILD_STAGE, DEFAULT_BUILD_TOOL,
    DEFAULT_CONTEXT, DEFAULT_FINAL_IMAGE, DEFAULT_OUTPUT_PATH, DEFAULT_SCANNER,
    DEFAULT_SCANNER_FORMAT,
};
pub use sbom_response::SbomResponse;
