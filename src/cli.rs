use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catapi")]
#[command(about = "Command-line client for The Cat API", long_about = None)]
pub struct Args {
    #[arg(long = "api-key", global = true, help = "API key (overrides CATAPI_API_KEY)")]
    pub api_key: Option<String>,

    #[arg(
        long = "base-url",
        global = true,
        help = "Custom API base URL (e.g., http://localhost:8080/api/)"
    )]
    pub base_url: Option<String>,

    #[arg(long = "config", global = true, help = "Read settings from this config file")]
    pub config: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", global = true, help = "Log requests to stderr")]
    pub verbose: bool,

    #[arg(long = "json", global = true, help = "Print the raw payload as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get random cat picture(s)
    Get(GetArgs),
    /// Vote on a picture (1 = bad, 10 = good)
    Vote {
        #[arg(long = "image-id")]
        image_id: Option<String>,
        #[arg(long)]
        score: Option<u32>,
        #[arg(long = "sub-id")]
        sub_id: Option<String>,
    },
    /// List votes made with your API key
    Votes {
        #[arg(long = "sub-id")]
        sub_id: Option<String>,
    },
    /// Favourite or unfavourite a picture
    Favourite {
        #[arg(long = "image-id")]
        image_id: Option<String>,
        #[arg(long, help = "add or remove (default: add)")]
        action: Option<String>,
        #[arg(long = "sub-id")]
        sub_id: Option<String>,
    },
    /// List favourites set with your API key
    Favourites {
        #[arg(long = "sub-id")]
        sub_id: Option<String>,
    },
    /// Report a picture so it no longer shows up for your API key
    Report {
        #[arg(long = "image-id")]
        image_id: Option<String>,
        #[arg(long = "sub-id")]
        sub_id: Option<String>,
        #[arg(long)]
        reason: Option<String>,
    },
    /// List all valid categories
    Categories,
    /// Show request, vote and favourite counters for your API key
    Overview,
    /// Write an example config file to ~/.config/catapi/catapi.yaml
    ConfigInit,
}

#[derive(ClapArgs, Debug, Default)]
pub struct GetArgs {
    #[arg(long = "image-id", help = "Return only this image")]
    pub image_id: Option<String>,

    #[arg(
        long = "type",
        help = "Comma separated file types (png, jpg, gif)"
    )]
    pub image_type: Option<String>,

    #[arg(short = 'n', long = "results-per-page", help = "Number of pictures (1 - 100)")]
    pub results_per_page: Option<u32>,

    #[arg(long, help = "Single category to filter for (see `catapi categories`)")]
    pub category: Option<String>,

    #[arg(long, help = "small, med or full")]
    pub size: Option<String>,

    #[arg(long = "sub-id")]
    pub sub_id: Option<String>,
}
