use catapi::api::{CatClient, ClientConfig, Transport};
use catapi::error::{CatApiError, Result};
use reqwest::Url;
use std::sync::{Arc, Mutex};

pub const OK_BODY: &str = "<response><data><images><image><id>abc</id>\
    <url>http://example.com/abc.jpg</url></image></images></data></response>";

/// Transport double that records every URL and replies with a fixed body,
/// or with an error when `fail_with` is set.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    pub calls: Arc<Mutex<Vec<Url>>>,
    pub body: String,
    pub fail_with: Option<String>,
}

impl RecordingTransport {
    pub fn replying(body: &str) -> Self {
        Self {
            body: body.to_string(),
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Url> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    async fn get(&self, url: Url) -> Result<String> {
        self.calls.lock().unwrap().push(url);
        match &self.fail_with {
            Some(message) => Err(CatApiError::Other(message.clone())),
            None => Ok(self.body.clone()),
        }
    }
}

pub fn client(api_key: Option<&str>) -> (CatClient<RecordingTransport>, RecordingTransport) {
    client_replying(api_key, OK_BODY)
}

pub fn client_replying(
    api_key: Option<&str>,
    body: &str,
) -> (CatClient<RecordingTransport>, RecordingTransport) {
    let transport = RecordingTransport::replying(body);
    let config = ClientConfig::new(api_key.map(str::to_string));
    (CatClient::with_transport(config, transport.clone()), transport)
}
