//! Application configuration.
//!
//! Centralized configuration for the Artflow frontend.
//! The production endpoint can be overridden at build time with the
//! `ARTFLOW_API_URL` environment variable (e.g. `ARTFLOW_API_URL=... trunk build`).

/// Gallery service used when the page is served from a local hostname.
pub const DEV_API_URL: &str = "http://localhost:3000/server/v1";

/// Gallery service used in production when no override is provided.
pub const PROD_API_URL: &str = "https://back-artflow-medellin.vercel.app/server/v1";

/// Build-time override for the production endpoint.
pub const API_URL_OVERRIDE: Option<&str> = option_env!("ARTFLOW_API_URL");

/// Hostnames treated as a local development server.
pub const LOCAL_HOSTNAMES: &[&str] = &["localhost", "127.0.0.1"];

/// Local storage key of the "already submitted" marker.
pub const SUBMISSION_GATE_KEY: &str = "art_uploaded";

/// MIME types accepted by the upload form.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpg", "image/jpeg", "image/webp"];

/// Maximum image size for upload (in bytes).
///
/// 10 MB limit, as advertised by the form.
pub const MAX_IMAGE_SIZE: f64 = 10.0 * 1024.0 * 1024.0;

/// How long a notification stays on screen (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Maximum notifications kept on screen.
pub const MAX_TOASTS: usize = 5;

/// Base URL of Instagram profiles, used for author links.
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/";

/// Resolve the gallery service base URL for the page's hostname.
pub fn api_base_url(hostname: &str) -> String {
    resolve_api_url(hostname, API_URL_OVERRIDE)
}

fn resolve_api_url(hostname: &str, override_url: Option<&str>) -> String {
    if LOCAL_HOSTNAMES.contains(&hostname) {
        return DEV_API_URL.to_string();
    }

    override_url
        .map(|url| url.trim_end_matches('/'))
        .filter(|url| !url.is_empty())
        .unwrap_or(PROD_API_URL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_hostname_uses_dev_endpoint() {
        assert_eq!(resolve_api_url("localhost", Some("https://api.example.com")), DEV_API_URL);
        assert_eq!(resolve_api_url("127.0.0.1", None), DEV_API_URL);
    }

    #[test]
    fn test_remote_hostname_prefers_override() {
        assert_eq!(
            resolve_api_url("artflow.example.com", Some("https://api.example.com/v1/")),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn test_remote_hostname_falls_back_to_production() {
        assert_eq!(resolve_api_url("artflow.example.com", None), PROD_API_URL);
        assert_eq!(resolve_api_url("artflow.example.com", Some("")), PROD_API_URL);
    }
}
