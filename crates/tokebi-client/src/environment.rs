//! Development/production classification from the host's page location.

use tokebi_core::Environment;
use url::Url;

/// `file:` pages and loopback hosts are development; everything else,
/// including a missing or unparseable location, is production.
pub fn detect_environment(page_url: Option<&str>) -> Environment {
    let Some(raw) = page_url else {
        return Environment::Production;
    };
    match Url::parse(raw) {
        Ok(url) if url.scheme() == "file" => Environment::Development,
        Ok(url) => match url.host_str() {
            Some("localhost") | Some("127.0.0.1") => Environment::Development,
            _ => Environment::Production,
        },
        Err(_) => Environment::Production,
    }
}
