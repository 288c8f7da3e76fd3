//! Calorie Tracker (caltrack)
//!
//! An MCP server for calorie estimation and daily food logging.

use caltrack::build_info;
use caltrack::config::Config;
use caltrack::estimator::Estimator;
use caltrack::mcp::CaltrackService;
use caltrack::session::Session;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("caltrack=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    info!(
        daily_target = config.daily_target,
        diet_preference = config.diet_preference.as_str(),
        simulated_latency_ms = config.simulated_latency_ms,
        "configuration loaded"
    );

    let session = Session::from_config(&config).shared();
    let estimator = Estimator::builtin().with_latency(config.simulated_latency());

    let service = CaltrackService::new(session, estimator);

    eprintln!("Starting MCP server on stdio...");
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
