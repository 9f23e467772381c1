//! Fire-and-forget target reporting to the robot controller.
//!
//! One datagram per frame with a selected target. The payload is an ASCII,
//! colon-delimited string the controller parses field by field; no
//! acknowledgment is awaited and nothing is retried.

use std::io;
use std::net::{SocketAddr, UdpSocket};

use retro_targets_core::TargetGroup;

/// Default controller endpoint on the robot network.
pub const DEFAULT_ENDPOINT: &str = "10.17.68.2:9999";

/// The per-frame values the controller consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetReport {
    /// Estimated range to the selected target, inches.
    pub distance: f32,
    /// Signed bearing, degrees, positive left of the image midline.
    pub angle: f32,
    /// Shooter tension setpoint.
    pub tension: f32,
}

impl TargetReport {
    /// Build the report from a frame's slot assignment, if a target was
    /// selected. Expects the tension to have been applied already.
    pub fn from_group(group: &TargetGroup) -> Option<Self> {
        group.selected.as_ref().map(|selected| Self {
            distance: selected.distance_y,
            angle: selected.angle_x,
            tension: selected.tension,
        })
    }

    /// ASCII wire rendering, without the trailing NUL.
    pub fn to_wire(&self) -> String {
        format!(
            "Distance={:.6}:Angle={:.6}:Tension={:.6}",
            self.distance, self.angle, self.tension
        )
    }
}

/// Errors on the reporting channel. Senders log these and keep processing;
/// a lost report only costs the controller one frame of data.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("failed to bind reporting socket: {0}")]
    Bind(#[source] io::Error),
    #[error("failed to send target report to {endpoint}: {source}")]
    Send {
        endpoint: SocketAddr,
        #[source]
        source: io::Error,
    },
}

/// Connectionless UDP reporter bound to an ephemeral local port.
#[derive(Debug)]
pub struct UdpReporter {
    socket: UdpSocket,
    endpoint: SocketAddr,
}

impl UdpReporter {
    pub fn new(endpoint: SocketAddr) -> Result<Self, ReportError> {
        let socket = UdpSocket::bind("0.0.0.0:0").map_err(ReportError::Bind)?;
        Ok(Self { socket, endpoint })
    }

    #[inline]
    pub fn endpoint(&self) -> SocketAddr {
        self.endpoint
    }

    /// Send one report datagram. The payload is NUL-terminated for the
    /// controller's C-string parser.
    pub fn send(&self, report: &TargetReport) -> Result<(), ReportError> {
        let mut payload = report.to_wire().into_bytes();
        payload.push(0);
        self.socket
            .send_to(&payload, self.endpoint)
            .map_err(|source| ReportError::Send {
                endpoint: self.endpoint,
                source,
            })?;
        Ok(())
    }
}
