use thiserror::Error;

/// Error raised when a number's units don't satisfy an operation.
///
/// This is the only error kind the value model surfaces: a human-readable
/// message describing the mismatch, optionally attributed to the named
/// function argument the offending number was passed as. When an argument
/// name is given, the rendered message is prefixed with `$name: `, matching
/// how Sass reports argument errors to users.
///
/// # Examples
///
/// ```rust
/// use sass_number::Number;
///
/// let err = Number::with_unit(1.0, "px")
///     .assert_unit("em", Some("width"))
///     .unwrap_err();
/// assert_eq!(err.to_string(), "$width: Expected 1px to have unit \"em\"");
/// assert_eq!(err.argument_name(), Some("width"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UnitError {
    message: String,
    name: Option<String>,
}

impl UnitError {
    pub(crate) fn new(message: impl Into<String>, name: Option<&str>) -> Self {
        let message = message.into();
        match name {
            Some(name) => Self {
                message: format!("${name}: {message}"),
                name: Some(name.to_string()),
            },
            None => Self {
                message,
                name: None,
            },
        }
    }

    /// The full rendered message, including the `$name: ` prefix if any.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The argument name the error is attributed to, if one was given.
    pub fn argument_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
