//! Errors that carry only a message and the location that raised them.

macro_rules! message_error {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
        #[display("{}: {} at line {} in {}", $label, message, line, file)]
        pub struct $name {
            /// Error message
            pub message: String,
            /// Line number where the error was raised
            pub line: u32,
            /// File where the error was raised
            pub file: &'static str,
        }

        impl $name {
            /// Create an error at the caller's location.
            #[track_caller]
            pub fn new(message: impl Into<String>) -> Self {
                let location = std::panic::Location::caller();
                Self {
                    message: message.into(),
                    line: location.line(),
                    file: location.file(),
                }
            }
        }
    };
}

message_error!(
    /// Transport failure while building or using an HTTP client.
    ///
    /// ```
    /// use mangaka_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.to_string().starts_with("HTTP Error: Connection refused"));
    /// ```
    HttpError,
    "HTTP Error"
);

message_error!(
    /// Configuration file could not be read or deserialized.
    ConfigError,
    "Configuration Error"
);

message_error!(
    /// A record could not be encoded or decoded as JSON.
    ///
    /// ```
    /// use mangaka_error::JsonError;
    ///
    /// let err = JsonError::new("expected value at line 1 column 1");
    /// assert!(err.message.contains("expected value"));
    /// ```
    JsonError,
    "JSON Error"
);
