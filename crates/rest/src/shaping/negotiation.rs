//! Hypermedia negotiation gate.
//!
//! Decides, from the already-negotiated media type, whether responses
//! should carry hypermedia links. The negotiated type is threaded in as an
//! explicit parameter; the gate holds no request state of its own.

use mime::Mime;

/// Returns whether the negotiated media type asks for hypermedia links.
///
/// True iff the subtype, with its format suffix stripped (`+json`,
/// `+xml`), ends with `hateoas`, compared case-insensitively. Requests
/// without a negotiated type default to flat shaping.
pub fn wants_links(media: Option<&Mime>) -> bool {
    let Some(media) = media else {
        return false;
    };
    subtype_without_suffix(media)
        .to_ascii_lowercase()
        .ends_with("hateoas")
}

/// The media type's subtype with its format suffix stripped:
/// `vnd.roster.hateoas+json` becomes `vnd.roster.hateoas`.
fn subtype_without_suffix(media: &Mime) -> &str {
    let subtype = media.subtype().as_str();
    match media.suffix() {
        Some(suffix) => &subtype[..subtype.len() - suffix.as_str().len() - 1],
        None => subtype,
    }
}
