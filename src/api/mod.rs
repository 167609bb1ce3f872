//! # API Module
//!
//! HTTP endpoints of the short-lived local server that runs while the user
//! authorizes sp2yt in the browser.
//!
//! - [`callback`] - Receives the authorization code from Spotify or Google,
//!   checks the CSRF state and exchanges the code for a token using the
//!   PKCE verifier held in the shared state.
//! - [`health`] - Reports status and version, handy to check that the
//!   redirect address is reachable.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
