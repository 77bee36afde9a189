/// Process adapters for running external build and scan tools
mod system_command_runner;

pub use system_command_runner::SystemCommandRunner;
