//! Caching puzzle client implementation

use crate::answers::{AnswerExtractor, Answers};
use crate::cache::PuzzleCache;
use crate::error::ClientError;
use crate::http::RemoteSource;
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Environment variable holding the session cookie value
pub const SESSION_ENV_VAR: &str = "AOC_SESSION";

/// Caching client for puzzle inputs and submitted answers
///
/// On first request for a `(year, day)` the client fetches from
/// adventofcode.com and writes the result under the cache root; every later
/// request is served from disk with no network access. Cache entries are
/// never invalidated; delete the file to refetch.
///
/// # Example
///
/// ```no_run
/// use aoc_client::PuzzleClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Reads the session cookie from AOC_SESSION
/// let client = PuzzleClient::from_env()?;
///
/// let input = client.get_input(2022, 1)?;
/// println!("Input length: {} bytes", input.len());
///
/// let answers = client.answers(2022, 1)?;
/// if let Some(part1) = answers.part1 {
///     println!("Part 1 was: {}", part1);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PuzzleClient {
    source: RemoteSource,
    cache: PuzzleCache,
    extractor: AnswerExtractor,
    session: Zeroizing<String>,
}

impl PuzzleClient {
    /// Create a client with the session cookie from `AOC_SESSION`
    ///
    /// The cache root defaults to the current working directory, giving the
    /// `inputs/` and `answers/` layout relative to where the process runs.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingSession` if `AOC_SESSION` is not set.
    /// The credential is validated here, before any network call.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::builder().session_from_env()?.build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> PuzzleClientBuilder {
        PuzzleClientBuilder::new()
    }

    /// Fetch puzzle input for a specific year and day, cached on disk
    ///
    /// Cache hit: the stored text is returned as-is, no network access.
    /// Cache miss: one GET against `/{year}/day/{day}/input`, stored and
    /// returned. A network failure propagates; there is no retry.
    pub fn get_input(&self, year: u16, day: u8) -> Result<String, ClientError> {
        let path = self.cache.input_path(year, day);
        if self.cache.contains(&path) {
            return self.cache.read(&path);
        }

        let url = self.source.input_url(year, day)?;
        let text = self.source.fetch_text(url, &self.session)?;
        self.cache.write(&path, &text)?;
        Ok(text)
    }

    /// Fetch puzzle input and split it into lines
    ///
    /// Convenience over [`get_input`](Self::get_input) for the common case
    /// of line-oriented puzzle input.
    pub fn input_lines(&self, year: u16, day: u8) -> Result<Vec<String>, ClientError> {
        let text = self.get_input(year, day)?;
        Ok(text.lines().map(str::to_string).collect())
    }

    /// Fetch the answers already submitted and accepted for a puzzle
    ///
    /// If both answer slots are cached on disk, they are read back with no
    /// network access. Otherwise the puzzle page is fetched once, every
    /// answer found in it is cached, and whatever is known is returned. A
    /// part not yet solved stays `None` rather than an error, and a later
    /// call will check the page again.
    pub fn answers(&self, year: u16, day: u8) -> Result<Answers, ClientError> {
        let part1_path = self.cache.answer_path(year, day, 1);
        let part2_path = self.cache.answer_path(year, day, 2);

        if !self.cache.contains(&part1_path) || !self.cache.contains(&part2_path) {
            let url = self.source.puzzle_url(year, day)?;
            let html = self.source.fetch_text(url, &self.session)?;
            let answers = self.extractor.extract(&html);
            if let Some(part1) = &answers.part1 {
                self.cache.write(&part1_path, part1)?;
            }
            if let Some(part2) = &answers.part2 {
                self.cache.write(&part2_path, part2)?;
            }
        }

        Ok(Answers {
            part1: self.cache.read_opt(&part1_path)?,
            part2: self.cache.read_opt(&part2_path)?,
        })
    }
}

/// Builder for configuring a [`PuzzleClient`]
///
/// The session is the only required setting; the base URL and cache
/// directory knobs exist mainly so tests can point the client at a mock
/// server and a temp directory.
#[derive(Debug, Default)]
pub struct PuzzleClientBuilder {
    session: Option<Zeroizing<String>>,
    cache_dir: Option<PathBuf>,
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl PuzzleClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session cookie value
    pub fn session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(Zeroizing::new(session.into()));
        self
    }

    /// Read the session cookie from `AOC_SESSION`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingSession` if the variable is unset.
    pub fn session_from_env(self) -> Result<Self, ClientError> {
        let session = std::env::var(SESSION_ENV_VAR).map_err(|_| ClientError::MissingSession)?;
        Ok(self.session(session))
    }

    /// Set the cache root directory (defaults to the working directory)
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Set a custom base URL, e.g. a mock server for testing
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, ClientError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder (timeouts, proxies, etc.)
    ///
    /// The redirect policy is always overridden to `Policy::none()`
    /// regardless of the provided configuration.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingSession` if no session was provided,
    /// or `ClientError::ClientInit` if the HTTP client cannot be built.
    pub fn build(self) -> Result<PuzzleClient, ClientError> {
        let session = self.session.ok_or(ClientError::MissingSession)?;

        let base_url = self.base_url.unwrap_or_else(|| {
            reqwest::Url::parse("https://adventofcode.com")
                .expect("Default base URL should always be valid")
        });

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        Ok(PuzzleClient {
            source: RemoteSource::new(base_url, builder)?,
            cache: PuzzleCache::new(self.cache_dir.unwrap_or_else(|| PathBuf::from("."))),
            extractor: AnswerExtractor::new(),
            session,
        })
    }
}
