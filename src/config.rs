/*
 * Responsibility
 * - 環境変数や設定の読み込み (APP_ENV, AUTH_ERROR_DETAIL)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app_env: AppEnv,
    // 401 body に失敗理由 (missing / malformed) を載せるか
    pub expose_auth_error_detail: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// 任意の変数ソースから Config を組み立てる (テストでは map を渡す)
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let detail_override = lookup("AUTH_ERROR_DETAIL")
            .map(|v| parse_bool(&v).ok_or(ConfigError::Invalid("AUTH_ERROR_DETAIL")))
            .transpose()?;

        Ok(Self::resolve(app_env, detail_override))
    }

    // 未指定なら production 以外で理由を出す
    fn resolve(app_env: AppEnv, detail_override: Option<bool>) -> Self {
        Self {
            app_env,
            expose_auth_error_detail: detail_override.unwrap_or(!app_env.is_production()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(AppEnv::parse(None), None)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
