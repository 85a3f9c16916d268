use serde::Deserialize;

/// Code the backend uses for success.
pub const CODE_OK: i32 = 0;

/// The backend's standard response wrapper: `{code, msg, data}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }
}
