pub mod command;
pub mod component;
pub mod identity_key;
pub mod scan_document;
pub mod target;

pub use command::CommandInvocation;
pub use component::Component;
pub use identity_key::IdentityKey;
pub use scan_document::ScanDocument;
pub use target::{
    BuildStep, ScanTarget, APP_TARGET, BUILD_IMAGE_TARGET, FINAL_IMAGE_TARGET,
};
