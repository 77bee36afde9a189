/// Application services driving the external build and scan tools
mod image_builder;
mod scan_invoker;

pub use image_builder::ImageBuilder;
pub use scan_invoker::ScanInvoker;
