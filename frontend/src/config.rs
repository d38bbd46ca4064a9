pub struct Config;

impl Config {
    /// Ambient API base URL for the deployed app.
    ///
    /// An empty base means relative URLs: in development Trunk proxies
    /// /dashboard/ to the API server, in production nginx does. Widgets
    /// receive the base as a prop, so tests can inject a mock instead.
    pub fn api_base_url() -> String {
        "".to_string()
    }
}
