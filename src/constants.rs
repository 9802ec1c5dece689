// DOM ids and capture defaults shared across the web shim.

pub const CANVAS_ID: &str = "output";
pub const VIDEO_ID: &str = "webcam";
pub const LOADER_ID: &str = "loader";
pub const LOADING_MESSAGE_ID: &str = "loading-message";
pub const ERROR_MESSAGE_ID: &str = "error-message";

// Requested capture resolution; the canvas is resized to whatever the
// camera actually delivers once metadata arrives.
pub const DEFAULT_VIDEO_WIDTH: u32 = 1280;
pub const DEFAULT_VIDEO_HEIGHT: u32 = 720;
