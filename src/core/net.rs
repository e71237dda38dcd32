// src/core/net.rs
// Blocking HTTPS GET. One request per call; nothing is cached or retried.

use std::{error::Error, time::Duration};

use crate::config::options::FetchOptions;

pub fn http_get(url: &str, opts: &FetchOptions) -> Result<String, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(opts.user_agent.as_str())
        .timeout(Duration::from_secs(opts.timeout_secs))
        .build()?;

    logd!("Net: GET {}", url);
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }

    let body = resp.text()?;
    logd!("Net: {} → {} bytes", status, body.len());
    Ok(body)
}
