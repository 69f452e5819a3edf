mod output;
mod presenter;
mod source;
mod telemetry;

use std::io::IsTerminal;
use std::net::SocketAddr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hsnp_core::catalog;
use hsnp_core::config::{Config, parse_duration_str};
use hsnp_core::presenter::MetricsView;

use crate::output::{print_dashboard_human, print_templates_human, print_tenants_human};
use crate::presenter::MetricsPresenter;
use crate::source::HttpMetricsSource;
use crate::telemetry::{init_cli_tracing, init_server_tracing, shutdown_tracing};

#[derive(Parser, Debug)]
#[command(name = "hsnp-admin")]
#[command(about = "HSNP admin dashboard server and terminal client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Serve the admin pages and demo metrics endpoint")]
    Serve {
        #[arg(long)]
        listen_addr: Option<String>,
    },
    #[command(about = "Show the delivery snapshot, refreshed from the metrics endpoint")]
    Dashboard {
        #[arg(long)]
        url: Option<String>,
        #[arg(long, help = "How long to wait for live metrics (e.g. 3s)")]
        wait: Option<String>,
        #[arg(long, help = "HTTP timeout for the metrics request (e.g. 5s)")]
        timeout: Option<String>,
    },
    #[command(about = "List tenants")]
    Tenants,
    #[command(about = "List message templates")]
    Templates,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen_addr } => {
            init_server_tracing();
            let mut cfg = Config::load().context("load config")?;
            if let Some(v) = listen_addr {
                cfg.listen_addr = v;
            }
            run_server(cfg).await
        }
        Commands::Dashboard { url, wait, timeout } => {
            init_cli_tracing();
            let mut cfg = Config::load().context("load config")?;
            if let Some(v) = url {
                cfg.metrics_url = Some(v);
            }
            if let Some(v) = wait {
                cfg.dashboard_wait = parse_duration_str(&v)?;
            }
            if let Some(v) = timeout {
                cfg.fetch_timeout = parse_duration_str(&v)?;
            }
            run_dashboard(cfg, cli.json).await
        }
        Commands::Tenants => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(catalog::tenants())?);
            } else {
                print_tenants_human(catalog::tenants());
            }
            Ok(())
        }
        Commands::Templates => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(catalog::templates())?);
            } else {
                print_templates_human(catalog::templates());
            }
            Ok(())
        }
    }
}

async fn run_server(cfg: Config) -> anyhow::Result<()> {
    let addr: SocketAddr = cfg
        .listen_addr
        .parse()
        .with_context(|| format!("parse listen addr {}", cfg.listen_addr))?;

    eprintln!("hsnp-admin serve");
    eprintln!("  dashboard: http://{addr}/");
    eprintln!("  metrics api: http://{addr}/api/demo-metrics");

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("received ctrl-c, shutting down");
    };
    let result = hsnp_web::server::run_web_server(addr, shutdown).await;
    shutdown_tracing();
    result.context("run admin web server")
}

async fn run_dashboard(cfg: Config, json: bool) -> anyhow::Result<()> {
    let source = HttpMetricsSource::new(cfg.metrics_url(), cfg.fetch_timeout)?;
    tracing::debug!(url = source.url(), "mounting dashboard");

    let (mut presenter, initial) = MetricsPresenter::mount(source);
    let color = std::io::stdout().is_terminal();

    render_view(&initial, json, color)?;

    // Past the wait the fallback stays; dropping the presenter abandons the fetch.
    if let Ok(settled) = tokio::time::timeout(cfg.dashboard_wait, presenter.settled()).await
        && settled != initial
    {
        render_view(&settled, json, color)?;
    }
    Ok(())
}

fn render_view(view: &MetricsView, json: bool, color: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(view.records())?);
    } else {
        print_dashboard_human(view, color);
    }
    Ok(())
}
