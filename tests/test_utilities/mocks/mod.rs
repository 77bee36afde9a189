/// Mock implementations for testing
mod mock_command_runner;
mod mock_output_writer;
mod mock_progress_reporter;

pub use mock_command_runner::MockCommandRunner;
pub use mock_output_writer::MockOutputWriter;
pub use mock_progress_reporter::MockProgressReporter;
