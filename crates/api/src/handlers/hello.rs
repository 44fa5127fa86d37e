use crate::{dto::OutputResponse, utils::PrettyJson};
use tracing::info;

pub async fn hello() -> PrettyJson<OutputResponse> {
    info!("Liveness check requested");
    PrettyJson(OutputResponse::new("Hello World..!"))
}
