use container_sbom::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock CommandRunner returning scripted outputs and recording every call
///
/// Commands without a scripted response succeed; scans then print an
/// empty CycloneDX document.
#[derive(Default, Clone)]
pub struct MockCommandRunner {
    responses: HashMap<String, CommandOutput>,
    launch_failures: Vec<String>,
    pub calls: Arc<Mutex<Vec<(String, OutputPolicy)>>>,
}

#[allow(dead_code)]
impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the output of one command line
    pub fn with_response(mut self, command: &str, output: CommandOutput) -> Self {
        self.responses.insert(command.to_string(), output);
        self
    }

    /// Scripts a successful scan printing the given document
    pub fn with_scan(self, command: &str, document: &str) -> Self {
        self.with_response(command, CommandOutput::success(document))
    }

    /// Makes the given program fail to start
    pub fn with_launch_failure(mut self, program: &str) -> Self {
        self.launch_failures.push(program.to_string());
        self
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(line, _)| line.clone())
            .collect()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, command: &CommandInvocation, policy: OutputPolicy) -> Result<CommandOutput> {
        let line = command.to_string();
        self.calls.lock().unwrap().push((line.clone(), policy));

        if self.launch_failures.iter().any(|p| p == command.program()) {
            return Err(container_sbom::shared::error::SbomError::CommandLaunchFailed {
                command: line,
                details: "No such file or directory (os error 2)".to_string(),
            }
            .into());
        }

        Ok(self
            .responses
            .get(&line)
            .cloned()
            .unwrap_or_else(|| match policy {
                OutputPolicy::Stream => CommandOutput::success(Vec::new()),
                OutputPolicy::Capture => {
                    CommandOutput::success(r#"{"bomFormat":"CycloneDX","components":[]}"#)
                }
            }))
    }
}
