//! Conversions from external infrastructure errors into domain errors.

use intercall_domain::IntercallError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub IntercallError);

impl From<InfraError> for IntercallError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<IntercallError> for InfraError {
    fn from(value: IntercallError) -> Self {
        InfraError(value)
    }
}

trait IntoIntercallError {
    fn into_intercall(self) -> IntercallError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → IntercallError */
/* -------------------------------------------------------------------------- */

impl IntoIntercallError for HttpError {
    fn into_intercall(self) -> IntercallError {
        let target = self.url().map(|url| format!(" ({url})")).unwrap_or_default();

        if self.is_timeout() {
            return IntercallError::Transport(format!("HTTP request timed out{target}"));
        }

        if self.is_connect() {
            return IntercallError::Transport(format!("HTTP connection failure{target}"));
        }

        if let Some(status) = self.status() {
            return IntercallError::Transport(format!(
                "HTTP {} {}{target}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        if self.is_builder() {
            return IntercallError::Internal(format!("invalid HTTP request: {self}"));
        }

        IntercallError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_intercall())
    }
}
