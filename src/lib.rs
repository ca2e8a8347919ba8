//! Async client for The Cat API.
//!
//! ```rust,no_run
//! use catapi::api::{CatClient, ClientConfig, GetImageParams};
//!
//! #[tokio::main]
//! async fn main() -> catapi::error::Result<()> {
//!     let client = CatClient::new(ClientConfig::new(None))?;
//!     let params = GetImageParams {
//!         results_per_page: Some(3),
//!         image_type: Some("gif".to_string()),
//!         ..Default::default()
//!     };
//!     let payload = client.get_image(&params).await?;
//!     for image in catapi::models::Image::list_from(&payload)? {
//!         println!("{}", image.url.unwrap_or_default());
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;
