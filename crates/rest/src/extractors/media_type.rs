//! Negotiated media type extractor.
//!
//! Parses the `Accept` header into the media type the shaping subsystem's
//! negotiation gate consumes. The result is threaded explicitly into
//! handlers as a parameter rather than stashed in ambient request state.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use mime::Mime;

/// The media type negotiated from the `Accept` header, if any.
///
/// Absent, wildcard, or unparseable `Accept` values yield `None`, which
/// downstream defaults to flat shaping; negotiation never rejects a
/// request.
#[derive(Debug, Clone)]
pub struct NegotiatedMedia(Option<Mime>);

impl NegotiatedMedia {
    /// The negotiated media type.
    pub fn mime(&self) -> Option<&Mime> {
        self.0.as_ref()
    }

    /// Builds a negotiated media value directly (test and internal use).
    pub fn from_mime(mime: Option<Mime>) -> Self {
        Self(mime)
    }
}

impl<S> FromRequestParts<S> for NegotiatedMedia
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let accept = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        // Simplified negotiation: first concrete, parseable media range
        // wins; quality values are ignored.
        for media_range in accept.split(',') {
            let media_range = media_range.trim();
            let Ok(mime) = media_range.parse::<Mime>() else {
                continue;
            };
            if mime.type_() == mime::STAR || mime.subtype() == mime::STAR {
                continue;
            }
            return Ok(Self(Some(mime)));
        }

        Ok(Self(None))
    }
}
