//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped in href paths; `/`, `?`, `&`, `=` and `#` keep their meaning
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Scheme prefix of managed public files
const PUBLIC_SCHEME: &str = "public://";

/// Whether a path points off-site (or is a bare fragment) and must be used verbatim
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("//")
        || path.starts_with("mailto:")
        || path.starts_with('#')
}

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/about us") // -> "/blog/about%20us"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = encode_path(path.trim_start_matches('/'));

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Build the public URL of a stored file
///
/// # Examples
/// ```ignore
/// file_url(&config, "public://team/photo.jpg")
/// // -> "http://example.com/sites/default/files/team/photo.jpg"
/// ```
pub fn file_url(config: &SiteConfig, uri: &str) -> String {
    if let Some(target) = uri.strip_prefix(PUBLIC_SCHEME) {
        let base = config.url.trim_end_matches('/');
        let files = format!("{}/{}", config.files_dir.trim_matches('/'), target);
        format!("{}{}", base, url_for(config, &files))
    } else if is_external(uri) {
        uri.to_string()
    } else {
        url_for(config, uri)
    }
}

/// Percent-encode a URL path, leaving separators intact
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH).to_string()
}
