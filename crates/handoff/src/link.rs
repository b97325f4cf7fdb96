//! Messaging deep-link construction.

/// Base of the messaging deep link. The destination number is the path
/// segment, the summary goes in the `text` query parameter.
const WA_BASE: &str = "https://wa.me";

/// Build the deep link for `text` addressed to `destination`.
///
/// `destination` is expected to be digits only (see
/// `atende_config::validate`); `text` is percent-encoded here.
pub fn deep_link(destination: &str, text: &str) -> String {
    format!("{WA_BASE}/{destination}?text={}", urlencoding::encode(text))
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_spaces_newlines_and_accents() {
        let url = deep_link("5583993193241", "Tipo: Orçamento\nlinha 2");
        assert!(url.starts_with("https://wa.me/5583993193241?text="));
        assert!(url.contains("Or%C3%A7amento"));
        assert!(url.contains("%0A"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn plain_ascii_passes_through() {
        let url = deep_link("123", "hello");
        assert_eq!(url, "https://wa.me/123?text=hello");
    }
}
