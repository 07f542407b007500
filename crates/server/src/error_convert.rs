use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_recovers_structured_error() {
        let sent = AppError::invalid_credentials();
        let wire = sent.clone().into_server_fn_error().to_string();
        assert_eq!(AppError::from_server_error(&wire), Some(sent));
    }

    #[test]
    fn recovered_error_keeps_the_credentials_copy() {
        let wire = AppError::invalid_credentials()
            .into_server_fn_error()
            .to_string();
        assert_eq!(
            AppError::from_server_error_or_internal(&wire).message,
            shared_types::INVALID_CREDENTIALS_MESSAGE
        );
    }
}
