use crate::db::PlayerSettings;

/// Append the configured access credential to a raw stream URL.
///
/// `separator` is `'?'` for bare URLs and `'&'` when the URL already carries a
/// query string. An OAuth token wins over the public client id; with neither
/// configured the URL is returned untouched.
pub fn add_access_token_with(url: &str, separator: char, settings: &PlayerSettings) -> String {
    if let Some(token) = settings
        .access_token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        return format!("{url}{separator}oauth_token={}", urlencoding::encode(token));
    }

    let client_id = settings.client_id.trim();
    if client_id.is_empty() {
        return url.to_string();
    }
    format!("{url}{separator}client_id={}", urlencoding::encode(client_id))
}

/// Pick the separator for `url` and append the credential.
pub fn resolve_stream_url(url: &str, settings: &PlayerSettings) -> String {
    if url.is_empty() {
        return String::new();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    add_access_token_with(url, separator, settings)
}
