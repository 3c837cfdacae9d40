// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// The bytes could not be decoded as an image.
    Image(String),
    /// The declared file type is not one of JPEG or PNG.
    UnsupportedFormat(String),
    /// A screen name outside the four known screens.
    UnknownScreen(String),
}

impl Error {
    /// Returns the i18n message key shown to the user for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-file-read-error",
            Error::Config(_) => "notification-config-load-error",
            Error::Image(_) => "notification-preview-error",
            Error::UnsupportedFormat(_) => "notification-invalid-format",
            Error::UnknownScreen(_) => "notification-unknown-screen",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::UnsupportedFormat(t) => write!(f, "Unsupported image type: {}", t),
            Error::UnknownScreen(s) => write!(f, "Unknown screen: {}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_error_becomes_config_error() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("[general");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn each_variant_has_a_notification_key() {
        let errors = [
            Error::Io(String::new()),
            Error::Config(String::new()),
            Error::Image(String::new()),
            Error::UnsupportedFormat(String::new()),
            Error::UnknownScreen(String::new()),
        ];
        for err in errors {
            assert!(err.i18n_key().starts_with("notification-"));
        }
    }

    #[test]
    fn unsupported_format_mentions_declared_type() {
        let err = Error::UnsupportedFormat("image/gif".into());
        assert!(err.to_string().contains("image/gif"));
    }
}
