use serde::Serialize;

/// `{"output": "..."}` envelope shared by every endpoint
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputResponse {
    pub output: String,
}

impl OutputResponse {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}
