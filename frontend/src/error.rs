use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Request timeout: The server took too long to respond. Please try again with a smaller file.")]
    Timeout,
    #[error("Network error: Unable to reach the server. Please check your connection and try again.")]
    Network(String),
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Request error: {0}")]
    Request(String),
}

impl From<wasm_bindgen::JsValue> for ApiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ApiError::Request(format!("{:?}", value))
    }
}
