use catapi::api::{
    CatClient, FavouriteParams, GetImageParams, ReportParams, SubIdParams, VoteParams,
};
use catapi::cli::{Args, Command};
use catapi::config::{Config, FileConfig};
use catapi::error::CatApiError;
use catapi::ui::output::{display_error, display_json, display_payload};
use clap::Parser;
use colored::*;
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Handle config-init before anything that needs a valid config
    if let Command::ConfigInit = args.command {
        process::exit(run_config_init());
    }

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            process::exit(1);
        }
    };

    catapi::logging::init(config.verbose);
    log::debug!("using base URL {}", config.base_url);
    if config.api_key.is_none() {
        log::debug!("no API key configured");
    }

    let client = match CatClient::new(config.client_config()) {
        Ok(client) => client,
        Err(e) => {
            display_error(&e);
            process::exit(1);
        }
    };

    match run(&client, args.command).await {
        Ok(payload) => {
            if args.json {
                display_json(&payload);
            } else {
                display_payload(&payload);
            }
        }
        Err(e) => {
            display_error(&e);
            process::exit(exit_code(&e));
        }
    }
}

async fn run(client: &CatClient, command: Command) -> Result<serde_json::Value, CatApiError> {
    match command {
        Command::Get(get) => {
            let params = GetImageParams {
                image_id: get.image_id,
                image_type: get.image_type,
                results_per_page: get.results_per_page,
                category: get.category,
                size: get.size,
                sub_id: get.sub_id,
            };
            client.get_image(&params).await
        }
        Command::Vote {
            image_id,
            score,
            sub_id,
        } => {
            let params = VoteParams {
                image_id,
                score,
                sub_id,
            };
            client.vote(&params).await
        }
        Command::Votes { sub_id } => client.get_votes(&SubIdParams { sub_id }).await,
        Command::Favourite {
            image_id,
            action,
            sub_id,
        } => {
            let params = FavouriteParams {
                image_id,
                action,
                sub_id,
            };
            client.favourite(&params).await
        }
        Command::Favourites { sub_id } => client.get_favourites(&SubIdParams { sub_id }).await,
        Command::Report {
            image_id,
            sub_id,
            reason,
        } => {
            let params = ReportParams {
                image_id,
                sub_id,
                reason,
            };
            client.report(&params).await
        }
        Command::Categories => client.list_categories().await,
        Command::Overview => client.get_overview().await,
        Command::ConfigInit => Err(CatApiError::Other(
            "config-init is handled before the client is built".to_string(),
        )),
    }
}

fn run_config_init() -> i32 {
    let Some(dir) = FileConfig::user_config_dir() else {
        eprintln!("{} could not determine home directory", "Error:".red());
        return 1;
    };

    let path = dir.join("catapi.yaml");
    match FileConfig::write_example(&path) {
        Ok(()) => {
            println!("{} {}", "Wrote".green(), path.display());
            0
        }
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            1
        }
    }
}

fn exit_code(error: &CatApiError) -> i32 {
    if error.is_validation() {
        2
    } else {
        1
    }
}
