use atende_common::FromMessage;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{message}")]
    Message { message: String },
}

impl Error {
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

impl FromMessage for Error {
    fn from_message(message: String) -> Self {
        Self::Message { message }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

atende_common::impl_context!();

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_prefixes_the_source_error() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = io.context("opening link").unwrap_err();
        assert_eq!(err.to_string(), "opening link: boom");
    }

    #[test]
    fn with_context_on_none_builds_a_message() {
        let missing: Option<u32> = None;
        let err = missing.with_context(|| "no destination").unwrap_err();
        assert_eq!(err.to_string(), "no destination");
    }

    #[test]
    fn context_passes_ok_values_through() {
        let ok: std::result::Result<u32, std::io::Error> = Ok(7);
        assert_eq!(ok.context("ignored").unwrap(), 7);
    }
}
