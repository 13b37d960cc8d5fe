use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::api_key::get_api_key;
use crate::state::AppState;

use super::ApiKey;

/// Handler で、 ApiKey を受け取るための extractor
/// `Authorization: ApiKey <key>` が無い・壊れている場合は 401 を返す
/// 本文に理由を載せるかは `AppState.auth` の policy で決める
pub struct ApiKeyExtractor(pub ApiKey);

impl FromRequestParts<AppState> for ApiKeyExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match get_api_key(&parts.headers) {
            Ok(key) => Ok(ApiKeyExtractor(ApiKey::new(key))),
            Err(err) => {
                tracing::warn!(
                    reason = err.reason(),
                    method = %parts.method,
                    path = parts.uri.path(),
                    "api key rejected"
                );

                if state.auth.expose_error_detail {
                    Err(err.into())
                } else {
                    Err(AppError::unauthorized("unauthorized"))
                }
            }
        }
    }
}
