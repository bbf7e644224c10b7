/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while a repository is collected and analyzed.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Shows an activity indicator while waiting on an operation of unknown length
    fn report_pending(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
