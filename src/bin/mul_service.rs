use calc_services::{config::Config, logging, operations::Operation, run_app};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logger();
    let config = Config::from_env()?;
    if let Err(e) = run_app(Operation::Multiplication, config).await {
        error!(error = %e, "multiplication service stopped");
        return Err(e.into());
    }
    Ok(())
}
