use lightstep_adapter::app;
use lightstep_adapter::error::AdapterError;

#[tokio::main]
async fn main() -> Result<(), AdapterError> {
    app::run().await
}
