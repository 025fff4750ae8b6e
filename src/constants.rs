// Page integration constants for the web frontend.

pub const CONTAINER_ID: &str = "hearts-container";
pub const CANVAS_ID: &str = "hearts-canvas";

// Optional `?seed=<u64>` query parameter fixing the layout
pub const SEED_QUERY_PARAM: &str = "seed";
