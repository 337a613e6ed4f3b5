// src/breach/mod.rs
//! k-anonymity breach lookup against a Pwned-Passwords-style range API.
//!
//! Only the first five hex characters of the password's SHA-1 digest are ever
//! sent over the wire; the full digest and the plaintext stay in-process.
//! SHA-1 here is the remote service's published contract, not a general
//! cryptographic choice of this crate.

use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::core::config::Config;
use crate::models::BreachReport;

/// Length of the digest prefix sent to the range API.
const PREFIX_LEN: usize = 5;

#[derive(Debug, Error)]
pub enum BreachError {
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("range API returned status {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("malformed range response: {0}")]
    Protocol(String),
}

pub type Result<T> = std::result::Result<T, BreachError>;

/// Client for the k-anonymity range protocol.
///
/// Holds a reusable [`reqwest::Client`]; safe to share across tasks. Never
/// retries internally; transient failures surface to the caller, which owns
/// the retry/timeout policy.
pub struct BreachChecker {
    client: reqwest::Client,
    api_base: String,
}

impl BreachChecker {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.range_api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Check whether `password` appears in the breach corpus.
    ///
    /// Returns the occurrence count reported by the corpus, or a
    /// `compromised: false` report when the digest suffix is absent from the
    /// returned range.
    pub async fn check(&self, password: &str) -> Result<BreachReport> {
        let digest = hex_digest(password);
        let (prefix, suffix) = digest.split_at(PREFIX_LEN);

        log::debug!("querying breach range for prefix {prefix}");

        let url = format!("{}/range/{}", self.api_base, prefix);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::UnexpectedStatus(status));
        }

        let body = response.text().await?;
        let count = scan_range(&body, suffix)?;

        Ok(BreachReport {
            compromised: count > 0,
            count,
        })
    }
}

/// Uppercase 40-hex SHA-1 digest of the password's UTF-8 bytes.
pub fn hex_digest(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// Scan a newline-delimited `SUFFIX:COUNT` body for an exact suffix match.
///
/// Tolerates both bare and carriage-return-terminated line endings. Returns
/// the matched count, or 0 when no record matches.
fn scan_range(body: &str, suffix: &str) -> Result<u64> {
    for line in body.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let (candidate, count) = line
            .split_once(':')
            .ok_or_else(|| BreachError::Protocol(format!("record without separator: {line:?}")))?;

        if candidate.eq_ignore_ascii_case(suffix) {
            let count: u64 = count.trim().parse().map_err(|_| {
                BreachError::Protocol(format!("non-numeric count in record: {line:?}"))
            })?;
            return Ok(count);
        }
    }
    Ok(0)
}
