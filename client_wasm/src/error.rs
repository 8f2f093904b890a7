use game_core::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no canvas with id `{0}`")]
    CanvasNotFound(String),

    #[error("canvas has no 2d context")]
    NoContext,

    #[error("client not initialized")]
    NotInitialized,

    #[error("invalid game config: {0}")]
    Config(#[from] ConfigError),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
