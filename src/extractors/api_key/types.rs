/*
 * Responsibility
 * - Handler から見える「抽出済み API key」の型
 * - extractor が Authorization ヘッダから取り出し、handler はこの型だけを受け取る
 *
 * Notes
 * - key の照合 (credential store への lookup) は呼び出し側の責務
 * - Debug では key を出さない (ログに漏らさない)
 */
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
