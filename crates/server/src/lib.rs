pub mod api;
pub mod utils;

mod heartbeat;
pub use heartbeat::{heartbeat, touch_liveness_file};

mod server;
pub use server::{router, serve, server};

// Re-export for OpenAPI documentation
pub use api::ApiDoc;
