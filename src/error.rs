use thiserror::Error;

/// Failures raised while composing or dispatching a mail message.
///
/// Each failure is a named constructor carrying a human-readable message;
/// there are no generic failure codes. Errors are raised at the point of
/// detection and are not retried internally; retry policy belongs to the
/// caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MailError {
    /// The sender address was empty
    #[error("sender address must not be empty")]
    EmptySender,
    /// The message had no recipients
    #[error("message must have at least one recipient")]
    EmptyRecipients,
    /// The message had no subject
    #[error("message is missing a subject")]
    MissingSubject,
    /// The message had no body
    #[error("message is missing a body")]
    MissingBody,
    /// An address failed validation
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// The transport rejected the message; carries the underlying system message
    #[error("transport failure: {0}")]
    Transport(String),
}
