use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::io::{self, BufRead};
use std::sync::Arc;

use ledstrip_client::clients::effect_client::EffectClient;
use ledstrip_client::clients::http_client::new_api_client;
use ledstrip_client::config::AppSettings;
use ledstrip_client::models::EffectRequest;
use ledstrip_client::notify::{ConsoleNotifier, Notifier};
use ledstrip_client::services::effect_trigger::{send_text_effect, DISPATCH_FAILED_MESSAGE};

#[derive(Parser)]
#[command(name = "ledstrip", about = "Remote control for the LED strip effect server")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Display text on the strip (reads one line from stdin when omitted)
    Text { value: Option<String> },
    /// Start a named effect
    Start {
        effect: String,
        args: Vec<String>,
    },
    /// Stop the running effect
    Stop,
    /// Show whether an effect is running
    Status,
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();

    // Load application settings
    let app_settings = match AppSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load application settings: {}", e);
            std::process::exit(1);
        }
    };

    let http = match new_api_client(&app_settings) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let client = Arc::new(EffectClient::new(http, app_settings.server.base_url.clone()));
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

    match cli.command {
        Command::Text { value } => {
            let input = match value {
                Some(v) => v,
                None => read_stdin_line(),
            };
            // The process would exit before the dispatch finishes, so the
            // CLI awaits the handle that a UI caller would drop.
            if let Some(handle) = send_text_effect(client, notifier, &input) {
                if let Err(e) = handle.await {
                    log::error!("Dispatch task failed: {}", e);
                }
            }
        }
        Command::Start { effect, args } => {
            let args = args.into_iter().map(serde_json::Value::String).collect();
            match client.start_effect(EffectRequest::new(effect, args)).await {
                Ok(result) => log::info!("{}", result),
                Err(e) => {
                    notifier.alert(DISPATCH_FAILED_MESSAGE);
                    log::error!("{}", e);
                }
            }
        }
        Command::Stop => match client.stop_effect().await {
            Ok(result) => log::info!("{}", result),
            Err(e) => {
                notifier.alert(DISPATCH_FAILED_MESSAGE);
                log::error!("{}", e);
            }
        },
        Command::Status => match client.status().await {
            Ok(status) => match status.effect {
                Some(effect) => println!("{} ({})", status.status, effect),
                None => println!("{}", status.status),
            },
            Err(e) => {
                notifier.alert(DISPATCH_FAILED_MESSAGE);
                log::error!("{}", e);
            }
        },
    }
}

fn read_stdin_line() -> String {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim_end_matches(['\r', '\n']).to_string()
}
