/*
 * Responsibility
 * - extractor に渡す共有コンテキスト (AppState)
 *   - 呼び出し側の Router に with_state() で載せる
 * - Clone 前提で持つ (中身は Copy のみ)
 */
use crate::config::Config;

/// 拒否したリクエストに何を返すかの方針
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthPolicy {
    pub expose_error_detail: bool,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: AuthPolicy,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            auth: AuthPolicy {
                expose_error_detail: config.expose_auth_error_detail,
            },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
