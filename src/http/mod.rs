//! HTTP protocol layer module
//!
//! Content-type resolution, path resolution and response building,
//! decoupled from routing and the serve loop.

pub mod mime;
pub mod path;
pub mod response;

// Re-export commonly used builders
pub use response::{build_file_response, build_not_found_response};
