mod config;
mod event;
mod handler;
mod models;

use lambda_runtime::{run, service_fn, Error};
use tracing_subscriber::{filter, EnvFilter};

use notify::SnsPublisher;

use config::Config;
use handler::{function_handler, AlertContext};


#[tokio::main]
async fn main() -> Result<(), Error> {

    // the platform timestamps every line on its own
    tracing_subscriber::fmt()
        .with_level(true)
        .with_ansi(false)
        .without_time()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();


    let config = Config::from_env()
        .inspect_err(|err| tracing::error!("Invalid configuration: {}", err))?;
    let publisher = SnsPublisher::from_env().await;

    tracing::info!("Sending unauthorized access alerts to {}", config.topic_arn);
    let ctx = AlertContext { config, publisher };

    run(service_fn(|event| function_handler(event, &ctx))).await
}
