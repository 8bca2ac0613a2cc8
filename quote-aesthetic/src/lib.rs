//! Client for the external aesthetic-suggestion service.
//!
//! Given a company logo, the service proposes a color palette, a font, and
//! a prose description of the intended look. The call is fully isolated
//! from document state: callers decide what, if anything, to apply; the
//! usual move is dispatching the first palette color into the theme.

mod client;
mod types;

pub use client::{AestheticClient, ENDPOINT_ENV, TOKEN_ENV};
pub use types::{AestheticError, AestheticRequest, AestheticSuggestion};
