// Include the client module
pub mod client;

/// Joins a base URL and a relative path with exactly one `/` between them.
///
/// ```
/// use gobarber_common::join_url;
///
/// assert_eq!(join_url("http://localhost:3333/", "/providers"), "http://localhost:3333/providers");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_normalizes_slashes() {
        assert_eq!(join_url("http://api", "providers"), "http://api/providers");
        assert_eq!(join_url("http://api/", "providers"), "http://api/providers");
        assert_eq!(join_url("http://api", "/providers/p1"), "http://api/providers/p1");
        assert_eq!(join_url("http://api/v1//", "//providers"), "http://api/v1/providers");
    }
}
