/*
 * Responsibility
 * - `Authorization: ApiKey <key>` からの API key 抽出 (services::auth::api_key)
 * - axum 向けの extractor / error / state / config を公開する
 * - key の照合・保存・発行はしない (呼び出し側の責務)
 */
pub mod config;
pub mod error;
pub mod extractors;
pub mod services;
pub mod state;

pub use config::{AppEnv, Config, ConfigError};
pub use error::AppError;
pub use extractors::{ApiKey, ApiKeyExtractor};
pub use services::auth::{ApiKeyError, get_api_key};
pub use state::{AppState, AuthPolicy};
