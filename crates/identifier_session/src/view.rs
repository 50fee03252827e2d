//! Render model derived from [`ViewState`].

use crate::ViewState;
use std::fmt;

/// Trigger label while idle.
pub const ANALYZE_LABEL: &str = "Analyze Image";

/// Trigger label while an analysis is in flight.
pub const ANALYZING_LABEL: &str = "Analyzing...";

/// Placeholder shown when no asset is selected.
pub const NO_IMAGE_LABEL: &str = "No image selected";

/// Which of the three mutually exclusive views is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ViewKind {
    /// Placeholder, no asset
    #[display("idle")]
    Idle,
    /// Asset shown, no result yet
    #[display("previewing")]
    Previewing,
    /// Asset and result shown
    #[display("result")]
    Result,
}

/// The selected image as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// `data:` URL of the asset
    pub data_url: String,
    /// Short description, e.g. `photo.png (image/png, 1204 bytes)`
    pub caption: String,
}

/// State of the Analyze trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeButton {
    /// Whether pressing it would start an analysis
    pub enabled: bool,
    /// Button text
    pub label: &'static str,
}

/// What the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Active view
    pub kind: ViewKind,
    /// Preview, present unless idle
    pub preview: Option<Preview>,
    /// Analyze trigger, present only with a preview
    pub analyze: Option<AnalyzeButton>,
    /// Result paragraphs, one per newline-delimited segment
    pub paragraphs: Vec<String>,
    /// Inline error text
    pub error: Option<String>,
}

impl View {
    pub(crate) fn from_state(state: &ViewState) -> Self {
        let preview = state.asset().map(|asset| Preview {
            data_url: asset.data_url().to_string(),
            caption: format!(
                "{} ({}, {} bytes)",
                asset.name().as_deref().unwrap_or("image"),
                asset.mime(),
                asset.len()
            ),
        });

        let analyze = preview.as_ref().map(|_| AnalyzeButton {
            enabled: !state.is_analyzing(),
            label: if state.is_analyzing() {
                ANALYZING_LABEL
            } else {
                ANALYZE_LABEL
            },
        });

        let paragraphs: Vec<String> = match (preview.is_some(), state.result()) {
            (true, Some(result)) => result.paragraphs().into_iter().map(str::to_string).collect(),
            _ => Vec::new(),
        };

        let kind = match (&preview, paragraphs.is_empty()) {
            (None, _) => ViewKind::Idle,
            (Some(_), true) => ViewKind::Previewing,
            (Some(_), false) => ViewKind::Result,
        };

        Self {
            kind,
            preview,
            analyze,
            paragraphs,
            error: state.error().map(str::to_string),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.preview {
            Some(preview) => writeln!(f, "Preview: {}", preview.caption)?,
            None => writeln!(f, "{}", NO_IMAGE_LABEL)?,
        }

        if let Some(button) = &self.analyze {
            let marker = if button.enabled { "" } else { " (disabled)" };
            writeln!(f, "[{}]{}", button.label, marker)?;
        }

        if self.kind == ViewKind::Result {
            writeln!(f)?;
            writeln!(f, "Analysis Results")?;
            for paragraph in &self.paragraphs {
                writeln!(f, "{}", paragraph)?;
            }
        }

        if let Some(error) = &self.error {
            writeln!(f)?;
            writeln!(f, "Error: {}", error)?;
        }

        Ok(())
    }
}
