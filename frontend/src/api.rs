// Re-export all API modules
pub mod dashboard;

/// Joins a base URL and a path. An empty base yields a relative URL,
/// which goes through the dev/prod proxy.
pub fn api_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        path.to_string()
    } else {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }
}
