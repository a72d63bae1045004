//! Blocking HTTP GET via libcurl.

use std::time::Duration;

use crate::error::FetchError;

/// Maximum redirects followed per request.
const MAX_REDIRECTS: u32 = 10;

/// Performs one GET and returns the full response body.
///
/// `timeout` bounds connection setup and any stall in the transfer (no bytes
/// received for that long), like a per-read timeout. Redirects are followed.
/// Any status outside 2xx is an error. Runs in the current thread; call from
/// `spawn_blocking` if used from async code.
pub fn http_get(url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
    let transport = |source: curl::Error| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.get(true).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(MAX_REDIRECTS).map_err(transport)?;
    easy.connect_timeout(timeout).map_err(transport)?;
    easy.low_speed_limit(1).map_err(transport)?;
    easy.low_speed_time(timeout).map_err(transport)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let status = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&status) {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, status, body.len());
    Ok(body)
}
