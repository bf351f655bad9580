//! Robot state snapshot and camera stream info.

use serde::Serialize;
use tracing::instrument;

use crate::mcp::dispatch::Dispatcher;
use crate::mcp::types::ToolResult;
use crate::transport::ApiRequest;
use crate::ReachyError;

/// Path of the MJPEG stream on the daemon.
pub const CAMERA_STREAM_PATH: &str = "/api/camera/stream";

/// Content type served by the camera stream.
pub const CAMERA_CONTENT_TYPE: &str = "multipart/x-mixed-replace; boundary=frame";

/// Where to find the camera stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraStreamInfo {
    pub message: String,
    pub url: String,
    pub content_type: String,
}

impl Dispatcher {
    #[instrument(name = "tool.get_robot_state", skip_all)]
    pub(crate) async fn handle_get_robot_state(&self) -> Result<ToolResult, ReachyError> {
        self.forward(ApiRequest::get("/api/state/full")).await
    }

    /// Derived locally; no upstream call.
    #[instrument(name = "tool.get_camera_stream", skip_all)]
    pub(crate) fn handle_get_camera_stream(&self) -> Result<ToolResult, ReachyError> {
        let info = CameraStreamInfo {
            message: "Camera stream endpoint".to_string(),
            url: format!(
                "{}{}",
                self.base_url.trim_end_matches('/'),
                CAMERA_STREAM_PATH
            ),
            content_type: CAMERA_CONTENT_TYPE.to_string(),
        };
        ToolResult::pretty(&info)
    }
}
