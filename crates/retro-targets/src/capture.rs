//! Frame acquisition and recording interfaces.
//!
//! Decoding frames is an external collaborator's job; this module only
//! fixes the configuration surface and the error contract. Failing to open
//! the configured source or the recording sink is unrecoverable: callers
//! are expected to report the error and exit non-zero rather than retry.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default live stream published by the on-robot camera.
pub const DEFAULT_STREAM_URL: &str =
    "http://10.17.68.90/axis-cgi/mjpg/video.cgi?resolution=320x240&req_fps=30&.mjpg";

/// Where frames come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FrameSourceConfig {
    /// Live MJPEG network stream.
    NetworkStream { url: String },
    /// Recorded video file, replayed frame by frame.
    VideoFile { path: PathBuf },
    /// A single still image, reprocessed on every tick.
    StillImage { path: PathBuf },
}

impl Default for FrameSourceConfig {
    fn default() -> Self {
        FrameSourceConfig::NetworkStream {
            url: DEFAULT_STREAM_URL.to_string(),
        }
    }
}

impl FrameSourceConfig {
    /// Classify a `--file` argument the way the original tooling did: a
    /// `.jpg` extension selects still-image mode, anything else is treated
    /// as a video file.
    pub fn from_file_arg(path: PathBuf) -> Self {
        let is_jpeg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg"));
        if is_jpeg {
            FrameSourceConfig::StillImage { path }
        } else {
            FrameSourceConfig::VideoFile { path }
        }
    }

    /// True when frames arrive in real time and are worth recording.
    pub fn is_live(&self) -> bool {
        matches!(self, FrameSourceConfig::NetworkStream { .. })
    }
}

/// Optional persisted copy of a live stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordingConfig {
    pub path: PathBuf,
    pub frames_per_second: f32,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("RobotVideo.mjpg"),
            frames_per_second: 30.0,
        }
    }
}

/// Startup failures on the capture side. Both variants are fatal.
#[derive(thiserror::Error, Debug)]
pub enum CaptureError {
    #[error("unable to open video source: {description}")]
    SourceOpen { description: String },
    #[error("unable to open recording sink {path}")]
    SinkOpen { path: PathBuf },
}

/// Frame acquisition backend. `grab` blocks until the next frame is
/// available; the surrounding loop serializes processing by grabbing only
/// after the previous frame finishes.
pub trait FrameSource {
    type Frame;

    fn grab(&mut self) -> Result<Self::Frame, CaptureError>;
}

/// Sink persisting live frames at a fixed rate.
pub trait FrameRecorder<F> {
    fn write(&mut self, frame: &F) -> Result<(), CaptureError>;
}
