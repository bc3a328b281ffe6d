//! `stockscan` command-line entry point.

mod cli;

use std::time::Duration;

use anyhow::Context;
use cli::{CommandLine, Commands};
use stockscan_dashboard::{
    Dashboard, DashboardConfig, HtmlTable, HttpInventoryApi, PeriodicScanner, ScannerConfig,
    TableBody, TextTable,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    stockscan_observability::init_with_default("warn");

    let config = match commands.api_url {
        Some(url) => DashboardConfig::new(url),
        None => DashboardConfig::from_env(),
    };
    tracing::info!(api_url = config.api_url(), "using inventory API");

    let api = HttpInventoryApi::new(config);

    match commands.command {
        Commands::List { html } => {
            if html {
                list(Dashboard::new(api, HtmlTable::new())).await
            } else {
                list(Dashboard::new(api, TextTable::new())).await
            }
        }
        Commands::Scan { action } => {
            let dashboard = Dashboard::new(api, TextTable::new());
            let report = dashboard.simulate_scan(action).await;
            println!("{}", report.notice);
            if report.rows.is_some() {
                println!("{}", dashboard.render().trim_end());
            }
            if report.notice.is_success() {
                Ok(())
            } else {
                anyhow::bail!("scan was not recorded")
            }
        }
        Commands::Simulate {
            tag,
            action,
            interval_secs,
            count,
        } => {
            let scanner = PeriodicScanner::new(
                api,
                ScannerConfig {
                    tag,
                    action,
                    interval: Duration::from_secs(interval_secs),
                    max_scans: count,
                },
            );
            let shutdown = scanner.shutdown_handle();
            let handle = scanner.start();

            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    shutdown.notify_one();
                }
            });

            let summary = handle.await.context("periodic scanner task failed")?;
            println!(
                "{} scans sent ({} failed)",
                summary.attempted(),
                summary.failed
            );
            Ok(())
        }
    }
}

async fn list<T: TableBody>(dashboard: Dashboard<HttpInventoryApi, T>) -> anyhow::Result<()> {
    dashboard
        .load_inventory()
        .await
        .context("failed to load inventory")?;
    println!("{}", dashboard.render().trim_end());
    Ok(())
}
