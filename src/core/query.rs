use crate::domain::model::SearchQuery;

pub const DEFAULT_ENDPOINT: &str = "http://rhymebrain.com/talk";
pub const DEFAULT_FUNCTION: &str = "getPortmanteaus";

/// Builds the RhymeBrain request URL for `query`.
///
/// The word is appended as-is: no percent-encoding is applied, so a word
/// containing `&` or spaces reaches the API exactly as typed.
pub fn build_request_url(endpoint: &str, function: &str, query: &SearchQuery) -> String {
    format!("{}?function={}&word={}", endpoint, function, query.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_default_url() {
        let url = build_request_url(DEFAULT_ENDPOINT, DEFAULT_FUNCTION, &"paul".into());
        assert_eq!(
            url,
            "http://rhymebrain.com/talk?function=getPortmanteaus&word=paul"
        );
    }

    #[test]
    fn test_word_is_not_encoded() {
        let url = build_request_url("http://host/talk", "f", &"a b&c".into());
        assert_eq!(url, "http://host/talk?function=f&word=a b&c");
    }

    #[test]
    fn test_empty_word() {
        let url = build_request_url("http://host/talk", "f", &"".into());
        assert_eq!(url, "http://host/talk?function=f&word=");
    }
}
