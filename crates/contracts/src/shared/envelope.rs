use serde::{Deserialize, Serialize};

/// The backend wraps most JSON payloads one level deep: responses come back
/// as `{ "data": ... }`, and the create endpoints expect the same shape in
/// the request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiData<T> {
    pub data: T,
}

impl<T> ApiData<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
