use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::CatalogFormatter;

/// Factory for creating catalog formatters
///
/// Picks the formatter adapter for an output format. Colors only apply to
/// the text format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `colored` - Whether the text formatter may emit ANSI colors
    ///
    /// # Examples
    /// ```
    /// use swapi_explorer::application::dto::OutputFormat;
    /// use swapi_explorer::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn CatalogFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::with_colors(colored)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Loading message shown while a page is fetched
    ///
    /// # Examples
    /// ```
    /// use swapi_explorer::application::factories::FormatterFactory;
    ///
    /// assert_eq!(FormatterFactory::page_loading_message(None), "Loading characters...");
    /// ```
    pub fn page_loading_message(search_term: Option<&str>) -> String {
        match search_term {
            Some(term) => format!("Searching for \"{}\"...", term),
            None => "Loading characters...".to_string(),
        }
    }
}
