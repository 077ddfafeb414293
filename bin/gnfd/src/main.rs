//! gnfd command line binary.

#[tokio::main]
async fn main() -> eyre::Result<()> {
    gnfd_cli_commands::run().await
}
