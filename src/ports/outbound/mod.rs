/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (processes, file system, console).
pub mod command_runner;
pub mod formatter;
pub mod output_writer;
pub mod progress_reporter;

pub use command_runner::{CommandOutput, CommandRunner, OutputPolicy};
pub use formatter::SbomFormatter;
pub use output_writer::OutputWriter;
pub use progress_reporter::ProgressReporter;
