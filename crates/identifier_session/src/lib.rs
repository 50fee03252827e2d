//! View state and analysis session for Object Identifier.
//!
//! [`ViewState`] is a plain value with one method per event; it never does
//! I/O. [`AnalysisSession`] wires it to the image sources, the encoder and a
//! [`VisionAnalyzer`](identifier_models::VisionAnalyzer).

mod session;
mod state;
mod view;

pub use session::{AnalysisSession, AnalyzeOutcome};
pub use state::{ActiveState, AnalysisTicket, Completion, ViewState};
pub use view::{
    ANALYZE_LABEL, ANALYZING_LABEL, AnalyzeButton, NO_IMAGE_LABEL, Preview, View, ViewKind,
};
