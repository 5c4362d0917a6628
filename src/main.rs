//! `tftp` 바이너리 진입점.

use tftp_shell::infrastructure::config::inspect_pretty_json;
use tftp_shell::interface::cli::{Cli, CliAction};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse_action() {
        CliAction::InspectConfig { config } => match inspect_pretty_json(config.as_deref()) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Interactive(options) => {
            let code = tftp_shell::run(options).await;
            std::process::exit(code);
        }
    }
}
