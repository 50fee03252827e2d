//! Analysis result type.

/// Free-text answer from the vision model.
///
/// The text is kept exactly as returned; presentation splits it into one
/// paragraph per `\n`-delimited segment.
///
/// # Examples
///
/// ```
/// use identifier_core::AnalysisResult;
///
/// let result = AnalysisResult::new("A red mug.\n\nCeramic.");
/// assert_eq!(result.paragraphs(), vec!["A red mug.", "", "Ceramic."]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
#[display("{}", text)]
pub struct AnalysisResult {
    text: String,
}

impl AnalysisResult {
    /// Wraps the model's raw text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw text, unmodified.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// One entry per newline-delimited segment, empty segments included.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }
}
