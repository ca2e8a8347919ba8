pub mod client;
pub mod params;
pub mod response;
pub mod transport;
pub mod xml;

pub use client::{CatClient, ClientConfig, Endpoint, DEFAULT_BASE_URL};
pub use params::{FavouriteParams, GetImageParams, ReportParams, SubIdParams, VoteParams};
pub use transport::{HttpTransport, Transport};
