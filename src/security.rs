use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

/// Header carrying the shared secret for `/api/revalidate`.
pub const REVALIDATE_SECRET_HEADER: &str = "x-revalidate-secret";

/// Outcome of checking a revalidation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevalidateAccess {
    /// No secret configured; the endpoint does not exist.
    Disabled,
    Denied,
    Granted,
}

/// Constant-time string comparison for shared secrets.
pub fn secrets_match(expected: &str, provided: &str) -> bool {
    if expected.len() != provided.len() {
        return false;
    }
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}

/// Check the revalidation secret header against the configured secret.
pub fn authorize_revalidate(configured: Option<&str>, headers: &HeaderMap) -> RevalidateAccess {
    let Some(expected) = configured else {
        return RevalidateAccess::Disabled;
    };

    let provided = headers
        .get(REVALIDATE_SECRET_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(provided) if secrets_match(expected, provided) => RevalidateAccess::Granted,
        _ => RevalidateAccess::Denied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(secret: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REVALIDATE_SECRET_HEADER, HeaderValue::from_str(secret).unwrap());
        headers
    }

    #[test]
    fn test_secrets_match() {
        assert!(secrets_match("s3cret-token", "s3cret-token"));
        assert!(!secrets_match("s3cret-token", "s3cret-tokeN"));
        assert!(!secrets_match("s3cret-token", "s3cret"));
        assert!(!secrets_match("s3cret", ""));
    }

    #[test]
    fn test_disabled_without_configured_secret() {
        assert_eq!(
            authorize_revalidate(None, &headers("anything")),
            RevalidateAccess::Disabled
        );
    }

    #[test]
    fn test_missing_header_is_denied() {
        assert_eq!(
            authorize_revalidate(Some("s3cret"), &HeaderMap::new()),
            RevalidateAccess::Denied
        );
    }

    #[test]
    fn test_wrong_secret_is_denied() {
        assert_eq!(
            authorize_revalidate(Some("s3cret"), &headers("guess")),
            RevalidateAccess::Denied
        );
    }

    #[test]
    fn test_matching_secret_is_granted() {
        assert_eq!(
            authorize_revalidate(Some("s3cret"), &headers("s3cret")),
            RevalidateAccess::Granted
        );
    }
}
