//! Joining the configured base URL with the endpoint path.

/// Strip trailing slashes so a path can be appended without doubling them.
///
/// ```
/// use nimdie::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://localhost:5001/"), "http://localhost:5001");
/// assert_eq!(normalize_base_url("http://localhost:5001"), "http://localhost:5001");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Build the full endpoint URL from a base URL and a path.
///
/// ```
/// use nimdie::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://localhost:5001/", "/api/ask"),
///     "http://localhost:5001/api/ask"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let endpoint = endpoint.trim().trim_start_matches('/');
    if endpoint.is_empty() {
        return normalized_base;
    }
    format!("{}/{}", normalized_base, endpoint)
}
