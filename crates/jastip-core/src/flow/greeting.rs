//! Backend connectivity check against the greeting endpoint.

use crate::api::AuthApi;

/// Shown when the greeting request does not complete
pub const BACKEND_UNREACHABLE: &str = "Failed to connect to backend.";

/// Fetch the greeting once; no retry, no timeout
pub async fn check_backend(api: &dyn AuthApi) -> String {
    match api.greeting().await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch greeting");
            BACKEND_UNREACHABLE.into()
        }
    }
}
