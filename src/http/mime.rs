//! Content-type table
//!
//! Maps a file extension to its MIME type for the response header.

/// Resolve the MIME content-type for a file name.
///
/// The extension is the second `.`-delimited token of the name, so
/// `app.min.js` resolves via `min` (and misses the table). Extensions
/// absent from the table resolve to `None`; the caller decides what to
/// put on the wire in that case.
pub fn content_type_for(file_name: &str) -> Option<&'static str> {
    let extension = file_name.split('.').nth(1);

    match extension {
        Some("html") => Some("text/html"),
        Some("css") => Some("text/css"),
        Some("js") => Some("application/javascript"),
        Some("jpg") => Some("image/jpeg"),
        Some("ico") => Some("image/x-icon"),
        _ => None,
    }
}
