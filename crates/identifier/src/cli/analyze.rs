//! Analyze and capture command handlers.

use anyhow::Context;
use identifier::{
    AnalysisSession, CameraDevice, FileHandle, GeminiVisionClient, IdentifierConfig,
    api_key_from_env,
};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, instrument};

fn build_session(
    config: &IdentifierConfig,
) -> anyhow::Result<AnalysisSession<GeminiVisionClient>> {
    let api_key = api_key_from_env().context("Set GEMINI_API_KEY to use the vision model")?;
    let client = GeminiVisionClient::new(config.gemini_settings(api_key)?)?;
    Ok(AnalysisSession::new(client, config.model().prompt().as_str()))
}

async fn analyze_and_print(session: &AnalysisSession<GeminiVisionClient>) -> ExitCode {
    session.analyze().await;
    let view = session.view();
    print!("{}", view);
    if view.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Handles the analyze command.
#[instrument(skip_all, fields(file = %file.display()))]
pub async fn handle_analyze_command(
    config: &IdentifierConfig,
    file: std::path::PathBuf,
    mime: Option<String>,
) -> anyhow::Result<ExitCode> {
    let session = build_session(config)?;
    let handle = match mime {
        Some(mime) => FileHandle::with_mime(file, mime),
        None => FileHandle::new(file),
    };

    if !session.upload(&handle).await {
        print!("{}", session.view());
        return Ok(ExitCode::FAILURE);
    }

    info!(model = %config.model().model(), "Analyzing image");
    Ok(analyze_and_print(&session).await)
}

/// Handles the capture command.
#[instrument(skip_all, fields(device = device))]
pub async fn handle_capture_command(
    config: &IdentifierConfig,
    delay_ms: Option<u64>,
    device: u32,
) -> anyhow::Result<ExitCode> {
    let session = build_session(config)?;

    let mut options = config.capture_options();
    if let Some(delay_ms) = delay_ms {
        options.delay = Duration::from_millis(delay_ms);
    }

    let camera = open_camera(device);
    eprintln!(
        "Capturing from {} in {:.1}s...",
        camera.name(),
        options.delay.as_secs_f32()
    );

    if !session.capture(camera.as_ref(), options).await {
        print!("{}", session.view());
        return Ok(ExitCode::FAILURE);
    }

    Ok(analyze_and_print(&session).await)
}

#[cfg(feature = "webcam")]
fn open_camera(device: u32) -> Box<dyn CameraDevice> {
    Box::new(identifier::Webcam::new(device))
}

#[cfg(not(feature = "webcam"))]
fn open_camera(device: u32) -> Box<dyn CameraDevice> {
    tracing::warn!(device, "Built without the webcam feature");
    Box::new(identifier::UnavailableCamera)
}
