//! Cinema gRPC Service - Entry Point

#[tokio::main]
async fn main() -> eyre::Result<()> {
    cinema_server::run().await
}
