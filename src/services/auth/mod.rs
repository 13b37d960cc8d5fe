pub mod api_key;

pub use api_key::{API_KEY_PREFIX, ApiKeyError, get_api_key};
