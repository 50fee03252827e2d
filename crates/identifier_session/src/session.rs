//! The capture → encode → request → display workflow.

use crate::{Completion, View, ViewState};
use identifier_capture::{
    CameraDevice, CaptureOptions, FileHandle, capture_from_camera, pick_from_file,
};
use identifier_core::{AnalysisRequest, AnalysisResult, ImageAsset, to_base64_payload};
use identifier_error::UserFacing;
use identifier_models::VisionAnalyzer;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Result of pressing Analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AnalyzeOutcome {
    /// Trigger was disabled (no asset, or already analyzing); no request made
    #[display("not started")]
    NotStarted,
    /// The request finished and the state was updated as described
    #[display("{}", _0)]
    Finished(Completion),
}

/// An analysis session: one view state, one analyzer, one prompt.
///
/// The state sits behind a mutex so that [`reset`](Self::reset) can run while
/// [`analyze`](Self::analyze) is awaiting the model. The lock is never held
/// across an await.
pub struct AnalysisSession<A> {
    state: Arc<Mutex<ViewState>>,
    analyzer: A,
    prompt: String,
}

impl<A: VisionAnalyzer> AnalysisSession<A> {
    /// Idle session using `prompt` for every analysis.
    pub fn new(analyzer: A, prompt: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ViewState::new())),
            analyzer,
            prompt: prompt.into(),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ViewState {
        self.state.lock().clone()
    }

    /// Render model of the current state.
    pub fn view(&self) -> View {
        self.state.lock().view()
    }

    /// The analyzer in use.
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Makes an already-loaded asset current.
    pub fn select_asset(&self, asset: ImageAsset) {
        self.state.lock().select_asset(asset);
    }

    /// Reads a user-selected file and makes it the current asset.
    ///
    /// Returns whether an asset was set; failures are shown inline.
    #[instrument(skip(self, handle), fields(path = %handle.path().display()))]
    pub async fn upload(&self, handle: &FileHandle) -> bool {
        match pick_from_file(handle).await {
            Ok(asset) => {
                self.state.lock().select_asset(asset);
                true
            }
            Err(e) => {
                warn!(error = %e, "File pick failed");
                self.state.lock().report_error(e.user_message());
                false
            }
        }
    }

    /// Takes a camera snapshot and makes it the current asset.
    ///
    /// Returns whether an asset was set; failures are shown inline and leave
    /// any existing asset in place.
    #[instrument(skip(self, device), fields(device = device.name()))]
    pub async fn capture(&self, device: &dyn CameraDevice, options: CaptureOptions) -> bool {
        match capture_from_camera(device, options).await {
            Ok(asset) => {
                self.state.lock().select_asset(asset);
                true
            }
            Err(e) => {
                warn!(error = %e, "Camera capture failed");
                self.state.lock().report_error(e.user_message());
                false
            }
        }
    }

    /// Encodes the current asset, sends it to the model and records the answer.
    ///
    /// Does nothing while another analysis is in flight. Every failure is
    /// recovered into the inline error text.
    #[instrument(skip(self), fields(model = self.analyzer.model_name()))]
    pub async fn analyze(&self) -> AnalyzeOutcome {
        let (ticket, asset) = {
            let mut state = self.state.lock();
            let asset = state.asset().cloned();
            match (state.start_analysis(), asset) {
                (Some(ticket), Some(asset)) => (ticket, asset),
                _ => {
                    debug!("Analyze trigger disabled");
                    return AnalyzeOutcome::NotStarted;
                }
            }
        };

        let outcome = match to_base64_payload(&asset) {
            Ok(image) => {
                let request = AnalysisRequest::new(image, self.prompt.as_str());
                match self.analyzer.analyze(&request).await {
                    Ok(text) => {
                        info!(ticket = ticket.id(), chars = text.len(), "Analysis complete");
                        Ok(AnalysisResult::new(text))
                    }
                    Err(e) => {
                        error!(ticket = ticket.id(), error = %e, "Analysis failed");
                        Err(e.user_message().to_string())
                    }
                }
            }
            Err(e) => {
                error!(ticket = ticket.id(), error = %e, "Encoding failed");
                Err(e.user_message().to_string())
            }
        };

        let completion = self.state.lock().complete_analysis(ticket, outcome);
        debug!(ticket = ticket.id(), %completion, "Analysis completion handled");
        AnalyzeOutcome::Finished(completion)
    }

    /// Returns to idle without interrupting an in-flight request.
    pub fn reset(&self) {
        self.state.lock().reset();
    }
}

impl<A> Clone for AnalysisSession<A>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            analyzer: self.analyzer.clone(),
            prompt: self.prompt.clone(),
        }
    }
}
