//! Energy Formatter
//!
//! An MCP server for localized energy formatting.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use energy_fmt::build_info;
use energy_fmt::config::ServerConfig;
use energy_fmt::energy::EnergyFormatter;
use energy_fmt::mcp::EnergyService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays reserved for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("energy_fmt=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env();
    build_info::print_startup_banner(&config.formatter);

    // Fail at startup rather than on the first tool call
    EnergyFormatter::new(config.formatter.clone())?;

    tracing::info!(
        locale = %config.formatter.locale_identifier,
        source = ?config.locale_source,
        unit_style = %config.formatter.unit_style,
        food_energy = config.formatter.is_for_food_energy_use,
        "Formatter configured"
    );
    eprintln!("Starting MCP server on stdio...");

    let service = EnergyService::new(config);

    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
