//! Pure view state transitions.

use crate::view::View;
use identifier_core::{AnalysisResult, ImageAsset};
use tracing::{debug, trace};

/// Proof that an analysis was admitted.
///
/// A completion is applied only when it presents the ticket currently in
/// flight and the asset generation has not moved since the ticket was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnalysisTicket {
    id: u64,
    generation: u64,
}

impl AnalysisTicket {
    /// Sequence number of the analysis.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Asset generation the analysis was started for.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a completion handed to [`ViewState::complete_analysis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Completion {
    /// Result or error is now displayed
    #[display("applied")]
    Applied,
    /// The analysis finished but its asset was replaced; output discarded
    #[display("stale")]
    Stale,
    /// Not the analysis in flight (e.g. a reset happened); nothing changed
    #[display("ignored")]
    Ignored,
}

/// The single non-error state currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ActiveState {
    /// Nothing selected
    #[display("idle")]
    Idle,
    /// An asset is shown, not yet analyzed
    #[display("has preview")]
    HasPreview,
    /// An analysis is in flight
    #[display("analyzing")]
    Analyzing,
    /// A result is shown
    #[display("has result")]
    HasResult,
}

/// Everything the view renders, owned explicitly by the caller.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    asset: Option<ImageAsset>,
    result: Option<AnalysisResult>,
    error: Option<String>,
    analyzing: bool,
    generation: u64,
    tickets_issued: u64,
    in_flight: Option<AnalysisTicket>,
}

impl ViewState {
    /// Idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the asset and clears any result and error.
    pub fn select_asset(&mut self, asset: ImageAsset) {
        self.generation += 1;
        debug!(generation = self.generation, asset = ?asset, "Asset selected");
        self.asset = Some(asset);
        self.result = None;
        self.error = None;
    }

    /// Admits an analysis if an asset is present and none is in flight.
    ///
    /// Returns `None`, changing nothing, when the trigger would be disabled.
    pub fn start_analysis(&mut self) -> Option<AnalysisTicket> {
        if self.asset.is_none() {
            trace!("Analysis refused: no asset");
            return None;
        }
        if self.analyzing {
            trace!("Analysis refused: already analyzing");
            return None;
        }

        self.tickets_issued += 1;
        let ticket = AnalysisTicket {
            id: self.tickets_issued,
            generation: self.generation,
        };
        self.analyzing = true;
        self.error = None;
        self.in_flight = Some(ticket);
        debug!(ticket = ticket.id, generation = ticket.generation, "Analysis started");
        Some(ticket)
    }

    /// Applies the outcome of an analysis.
    ///
    /// `Err` carries the message to display.
    pub fn complete_analysis(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<AnalysisResult, String>,
    ) -> Completion {
        if !self.analyzing || self.in_flight != Some(ticket) {
            debug!(ticket = ticket.id, "Ignoring completion for analysis not in flight");
            return Completion::Ignored;
        }

        self.in_flight = None;
        self.analyzing = false;

        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.id,
                started_for = ticket.generation,
                current = self.generation,
                "Discarding completion for replaced asset"
            );
            return Completion::Stale;
        }

        match outcome {
            Ok(result) => self.result = Some(result),
            Err(message) => self.error = Some(message),
        }
        Completion::Applied
    }

    /// Returns to idle. Does not interrupt an in-flight request; its
    /// completion will be ignored.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.asset = None;
        self.result = None;
        self.error = None;
        self.analyzing = false;
        self.in_flight = None;
        debug!(generation = self.generation, "View reset");
    }

    /// Shows an inline error without touching the asset.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Current asset, if any.
    pub fn asset(&self) -> Option<&ImageAsset> {
        self.asset.as_ref()
    }

    /// Current result, if any.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Current inline error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the busy flag is set.
    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Asset generation; bumped by asset selection and reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the state is fully idle: no asset, result, error or analysis.
    pub fn is_idle(&self) -> bool {
        self.asset.is_none() && self.result.is_none() && self.error.is_none() && !self.analyzing
    }

    /// The active non-error state.
    pub fn active(&self) -> ActiveState {
        if self.analyzing {
            ActiveState::Analyzing
        } else if self.result.is_some() {
            ActiveState::HasResult
        } else if self.asset.is_some() {
            ActiveState::HasPreview
        } else {
            ActiveState::Idle
        }
    }

    /// Render model of the current state.
    pub fn view(&self) -> View {
        View::from_state(self)
    }
}
