/// ProgressReporter port for operator-facing status output
///
/// This port abstracts progress reporting (e.g., to stderr) so the pipeline
/// stages can announce what they are doing without knowing the console.
pub trait ProgressReporter {
    /// Reports a status message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports progress through a sequence of steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total number of steps
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
