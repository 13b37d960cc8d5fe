/*
 * Responsibility
 * - Authorization ヘッダから API key を取り出す (`ApiKey <key>` scheme)
 * - 失敗理由を 2 種類に分類し、固定のメッセージで返す
 * - HTTP status への変換は error.rs 側の責務
 */
use axum::http::{HeaderMap, header};
use thiserror::Error;

/// scheme トークン (末尾の半角スペース 1 つを含む)。大文字小文字は区別する
pub const API_KEY_PREFIX: &str = "ApiKey ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

impl ApiKeyError {
    /// ログの field 用の短い識別子 (固定値)
    pub fn reason(&self) -> &'static str {
        match self {
            ApiKeyError::NoAuthHeaderIncluded => "missing",
            ApiKeyError::MalformedAuthHeader => "malformed",
        }
    }
}

/// `Authorization: ApiKey <key>` から API key を取り出す
///
/// 見るのは最初の `Authorization` 値だけ。prefix 以降はそのまま返すため、
/// `"ApiKey "` だけなら空の key になる
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, ApiKeyError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiKeyError::NoAuthHeaderIncluded)?;

    if value.is_empty() {
        return Err(ApiKeyError::NoAuthHeaderIncluded);
    }

    // to_str() は visible ASCII 限定なので、UTF-8 として読む
    let value =
        std::str::from_utf8(value.as_bytes()).map_err(|_| ApiKeyError::MalformedAuthHeader)?;

    value
        .strip_prefix(API_KEY_PREFIX)
        .ok_or(ApiKeyError::MalformedAuthHeader)
}
