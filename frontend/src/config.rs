pub struct Config;

impl Config {
    /// Base URL of the analytics API. Set `DASHBOARD_API_URL` at build time
    /// to point at another deployment.
    pub fn api_base_url() -> String {
        option_env!("DASHBOARD_API_URL")
            .unwrap_or("http://127.0.0.1:8000")
            .trim_end_matches('/')
            .to_string()
    }

    /// Rows requested for the density ranking table
    pub fn density_limit() -> usize {
        10
    }

    /// Region shown first in the role breakdown when present
    pub fn default_region() -> &'static str {
        "Europe"
    }

    /// Subregions plotted in the dominance chart
    pub fn dominance_top_n() -> usize {
        10
    }
}
