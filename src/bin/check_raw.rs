use catapi::api::client::redact;
use catapi::api::{response, xml, HttpTransport, Transport, DEFAULT_BASE_URL};
use colored::*;
use reqwest::Url;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    catapi::logging::init(false);

    // Get command line args
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <path> [key=value ...]", args[0]);
        eprintln!("  e.g. {} images/get format=xml results_per_page=2", args[0]);
        std::process::exit(1);
    }

    let base_url = env::var("CATAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let mut url = Url::parse(&base_url)?.join(args[1].trim_start_matches('/'))?;

    {
        let mut pairs = url.query_pairs_mut();
        if let Ok(key) = env::var("CATAPI_API_KEY") {
            pairs.append_pair("api_key", &key);
        }
        for arg in &args[2..] {
            match arg.split_once('=') {
                Some((k, v)) => {
                    pairs.append_pair(k, v);
                }
                None => {
                    eprintln!("{}", format!("Ignoring argument without '=': {}", arg).yellow());
                }
            }
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }

    println!("{} {}", "GET".green(), redact(&url).cyan());
    println!("{}", "-".repeat(80).dimmed());

    let transport = HttpTransport::new()?;
    let body = transport.get(url).await?;

    println!("{}", "Raw body:".bold());
    println!("{}", body.dimmed());
    println!("{}", "-".repeat(80).dimmed());

    match xml::to_value(&body) {
        Ok(document) => {
            println!("{}", "Normalized document:".bold());
            println!("{}", serde_json::to_string_pretty(&document)?);
            println!("{}", "-".repeat(80).dimmed());

            match response::unwrap_envelope(&document) {
                Ok(data) => {
                    println!("{}", "Data:".green());
                    println!("{}", serde_json::to_string_pretty(&data)?);
                }
                Err(e) => eprintln!("{}", e.to_string().red()),
            }
        }
        Err(e) => eprintln!("{}", format!("XML parse error: {}", e).red()),
    }

    Ok(())
}
