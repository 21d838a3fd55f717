use http::StatusCode;
use membership_auth::SessionError;

/// Generic message returned to clients for internal failures
pub(crate) const INTERNAL_ERROR_MESSAGE: &str = "ログイン処理中にエラーが発生しました";

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Session failures that reach a handler are internal problems (signing,
/// cookie writing). The detail goes to the log, never to the client.
impl<T> IntoResponseError<T> for Result<T, SessionError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            tracing::error!("Session operation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            )
        })
    }
}
