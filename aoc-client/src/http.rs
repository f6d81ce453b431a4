//! Authenticated HTTP access to the Advent of Code site

use crate::error::ClientError;
use reqwest::header::HeaderValue;
use zeroize::Zeroize;

/// HTTP source for puzzle input text and puzzle page HTML
///
/// Performs plain authenticated GETs and returns response bodies as text.
/// No retries and no redirect following; failures propagate to the caller.
#[derive(Clone, Debug)]
pub(crate) struct RemoteSource {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl RemoteSource {
    /// Build a source from a base URL and a preconfigured client builder
    ///
    /// The redirect policy is always forced to none: the site answers
    /// unauthenticated requests with a redirect, and following it would
    /// turn an auth failure into a confusing 200.
    pub fn new(
        base_url: reqwest::Url,
        builder: reqwest::blocking::ClientBuilder,
    ) -> Result<Self, ClientError> {
        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// URL of the puzzle input endpoint: `/{year}/day/{day}/input`
    pub fn input_url(&self, year: u16, day: u8) -> Result<reqwest::Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string(), "input"]);
        Ok(url)
    }

    /// URL of the puzzle statement page: `/{year}/day/{day}`
    pub fn puzzle_url(&self, year: u16, day: u8) -> Result<reqwest::Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string()]);
        Ok(url)
    }

    /// GET a URL with the session cookie and return the body as text
    pub fn fetch_text(&self, url: reqwest::Url, session: &str) -> Result<String, ClientError> {
        let cookie_header = Self::create_cookie_header(session)?;

        let response = self
            .client
            .get(url)
            .header("Cookie", cookie_header)
            .send()?;

        if !response.status().is_success() {
            return Err(ClientError::InvalidStatus {
                status: response.status(),
            });
        }

        response.text().map_err(|_| ClientError::Encoding)
    }

    /// Create a secure cookie header value from a session string
    ///
    /// The header is marked sensitive and the temporary cookie string is
    /// zeroized after use.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, ClientError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| ClientError::ClientInit("Invalid session cookie format".to_string()))?;

        let mut sensitive_header = header_value;
        sensitive_header.set_sensitive(true);
        cookie_string.zeroize();

        Ok(sensitive_header)
    }
}
