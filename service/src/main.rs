use anyhow::Context;
use clap::Parser;
use generator::profile::build_request;
use log::info;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::ServiceConfig;
use workflow::runner::Runner;

mod generator;
mod http_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Radar hazard assessment service")]
struct Args {
    /// Load service configuration from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
    #[arg(long, default_value_t = 8000)]
    port: u16,
    /// Assess one JSON request read from disk and print the response
    #[arg(long)]
    assess: Option<PathBuf>,
    /// Generate a synthetic batch with this many returns and assess it
    #[arg(long)]
    synthetic: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Serve the HTTP API until Ctrl+C
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = &args.config {
        info!("loading configuration from {}", path.display());
        ServiceConfig::load(path)?
    } else {
        ServiceConfig::from_args(args.host, args.port)
    };

    let runner = Arc::new(Runner::new(&config));

    if let Some(path) = &args.assess {
        let response = runner.execute_file(path)?;
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    if let Some(count) = args.synthetic {
        let raw = build_request(count, args.seed)?;
        println!("{}", serde_json::to_string_pretty(&raw)?);
        let response = runner
            .execute(raw)
            .context("assessing synthetic request")?;
        println!(
            "Synthetic run -> {} (score {:.3}) over {} returns",
            response.hazard_level(),
            response.score(),
            count.max(1)
        );
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    if args.serve {
        let runtime = TokioBuilder::new_multi_thread()
            .enable_all()
            .build()
            .context("creating runtime for HTTP server")?;
        runtime.block_on(http_bridge::routes::serve(
            runner,
            config.bind_address(),
            async {
                if signal::ctrl_c().await.is_err() {
                    log::warn!("failed to listen for Ctrl+C; stopping");
                }
            },
        ))?;
    } else if args.assess.is_none() && args.synthetic.is_none() {
        info!("nothing to do; pass --serve, --assess <file> or --synthetic <count>");
    }

    Ok(())
}
