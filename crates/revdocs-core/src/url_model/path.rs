//! Folder name extraction from URL path.

use crate::error::FetchError;

/// Extracts the last path segment of `url` for use as a folder name.
///
/// Trailing slashes are stripped first, so `/docs/payiq/` yields `payiq`.
/// Query and fragment are ignored. The segment is returned as it appears in
/// the (percent-encoded) URL path, without sanitization.
pub fn path_segment(url: &str) -> Result<String, FetchError> {
    let parsed = url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    let segment = parsed
        .path()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("");
    if segment.is_empty() {
        return Err(FetchError::NoPathSegment {
            url: url.to_string(),
        });
    }
    Ok(segment.to_string())
}
