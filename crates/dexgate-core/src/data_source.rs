//! Upstream source trait and request/error types.
//!
//! [`CreatureSource`] is the seam between the gateway and whatever serves raw
//! creature data. The production implementation is
//! [`PokeApiAdapter`](crate::adapters::PokeApiAdapter).
//!
//! # Operations
//!
//! | Method | Result | Not found |
//! |--------|--------|-----------|
//! | `list_creatures` | [`CreatureList`] | error |
//! | `get_creature` | `Option<Creature>` | `None` |
//! | `search_creatures` | `Vec<CreatureListItem>` | empty list |

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::http_client::HttpError;
use crate::{Creature, CreatureList, CreatureListItem};

/// Upper bound on the single page fetched to serve a search.
pub const SEARCH_CEILING: u32 = 1000;

/// Paging window for list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u32 = 20;

    pub const fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// Fills missing values with the defaults (20, 0).
    pub fn from_options(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self::new(
            limit.unwrap_or(Self::DEFAULT_LIMIT),
            offset.unwrap_or_default(),
        )
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT, 0)
    }
}

/// Upstream failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpstreamErrorKind {
    /// Upstream answered with an unexpected status.
    Status,
    /// Network failure or timeout; nothing came back.
    NoResponse,
    /// Upstream answered 2xx but the payload did not match the expected shape.
    Decode,
}

/// Structured upstream error. The message always carries the operation context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamError {
    kind: UpstreamErrorKind,
    message: String,
    status: Option<u16>,
    reason: Option<String>,
}

impl UpstreamError {
    pub fn status(context: &str, status: u16, reason: Option<&str>) -> Self {
        let reason = reason.map(str::to_owned);
        let message = match &reason {
            Some(reason) => format!("{context}: {status} - {reason}"),
            None => format!("{context}: {status}"),
        };
        Self {
            kind: UpstreamErrorKind::Status,
            message,
            status: Some(status),
            reason,
        }
    }

    pub fn no_response(context: &str, cause: &HttpError) -> Self {
        Self {
            kind: UpstreamErrorKind::NoResponse,
            message: format!("{context}: no response from upstream ({cause})"),
            status: None,
            reason: None,
        }
    }

    pub fn decode(context: &str, cause: &serde_json::Error) -> Self {
        Self {
            kind: UpstreamErrorKind::Decode,
            message: format!("{context}: malformed upstream payload ({cause})"),
            status: None,
            reason: None,
        }
    }

    pub const fn kind(&self) -> UpstreamErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status reported by upstream, if it answered at all.
    pub const fn http_status(&self) -> Option<u16> {
        self.status
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            UpstreamErrorKind::Status => "upstream.status",
            UpstreamErrorKind::NoResponse => "upstream.no_response",
            UpstreamErrorKind::Decode => "upstream.decode",
        }
    }
}

impl Display for UpstreamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for UpstreamError {}

pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, UpstreamError>> + Send + 'a>>;

/// Read access to an upstream creature catalogue.
///
/// Implementations must be `Send + Sync`; one instance serves every request.
pub trait CreatureSource: Send + Sync {
    /// Fetches one page of the catalogue with identifiers attached to each item.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on transport failure or any non-2xx status.
    fn list_creatures(&self, page: PageRequest) -> SourceFuture<'_, CreatureList>;

    /// Fetches one creature by numeric id or name slug.
    ///
    /// Absence upstream is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on transport failure or a non-2xx, non-404 status.
    fn get_creature<'a>(&'a self, identifier: &'a str) -> SourceFuture<'a, Option<Creature>>;

    /// Case-insensitive substring search over creature names, bounded by
    /// [`SEARCH_CEILING`].
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] when the backing list request fails.
    fn search_creatures<'a>(&'a self, query: &'a str) -> SourceFuture<'a, Vec<CreatureListItem>>;
}
