/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to give user feedback while requests are in flight.
pub trait ProgressReporter {
    /// Shows a loading indicator until `finish_loading` is called
    ///
    /// # Arguments
    /// * `message` - What is being loaded
    fn start_loading(&self, message: &str);

    /// Removes the loading indicator, if one is shown
    fn finish_loading(&self);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation, e.g. a written output file
    fn report_completion(&self, message: &str);
}
