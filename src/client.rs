//! Authenticated HTTP session.
//!
//! The platform authenticates with session cookies the user copies out of
//! their browser, supplied as a single `name=value; name=value` string. The
//! session parses that string into a cookie jar, builds a blocking client
//! with a fixed browser User-Agent, and verifies the cookies with a probe
//! request before any module is fetched. One session is reused, read-only,
//! for every fetch in a run.

use std::sync::Arc;

use log::debug;
use reqwest::blocking::Client;
use reqwest::cookie::Jar;
use reqwest::StatusCode;

use crate::encoding;
use crate::error::{Error, Result};
use crate::url_utils;

/// Sent with every request; the platform serves browser clients.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Requires a valid session; anything but 200 means the cookies are stale.
const PROBE_URL: &str = "https://academy.hackthebox.com/dashboard";

/// An authenticated, cookie-carrying HTTP client.
#[derive(Debug)]
pub struct Session {
    client: Client,
}

impl Session {
    /// Build a session from a cookie string and verify it against the
    /// platform's dashboard.
    ///
    /// # Errors
    /// [`Error::Client`] if the HTTP client cannot be built,
    /// [`Error::Fetch`] if the probe request fails at the transport level,
    /// [`Error::AuthenticationFailed`] if the probe returns anything but 200.
    pub fn authenticate(cookies: &str) -> Result<Self> {
        let session = Self::with_cookies(cookies)?;

        let response = session
            .client
            .get(PROBE_URL)
            .send()
            .map_err(|source| Error::Fetch {
                url: PROBE_URL.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::AuthenticationFailed(status.as_u16()));
        }

        Ok(session)
    }

    pub(crate) fn with_cookies(cookies: &str) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let base = url_utils::academy_base();

        for (name, value) in parse_cookie_pairs(cookies) {
            jar.add_cookie_str(&format!("{name}={value}"), base);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(Error::Client)?;

        Ok(Self { client })
    }

    /// Fetch a URL and return the response body as raw bytes.
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {url}");

        let response = self.client.get(url).send().map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;

        let bytes = response.bytes().map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;

        Ok(bytes.to_vec())
    }

    /// Fetch a URL and return the response body decoded to UTF-8.
    pub fn get_text(&self, url: &str) -> Result<String> {
        let bytes = self.get_bytes(url)?;
        Ok(encoding::decode_page(&bytes))
    }
}

/// Split a browser-style cookie string into name/value pairs.
///
/// Pairs are separated by `;`; each pair splits on its first `=` so values
/// containing `=` (base64 session payloads) survive intact. Entries without
/// an `=` are dropped, whitespace around names and values is trimmed.
#[must_use]
pub fn parse_cookie_pairs(cookies: &str) -> Vec<(String, String)> {
    cookies
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}
