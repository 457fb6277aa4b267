//! # API Module
//!
//! HTTP endpoints for the temporary local web server that backs the OAuth
//! flow. The server only lives for the duration of `spiritcli auth`.
//!
//! - [`callback`] - Handles OAuth callback requests from Spotify's
//!   authorization server and completes the PKCE flow by exchanging the
//!   authorization code for an access token.
//! - [`health`] - Health check endpoint returning application status and
//!   version information.
//!
//! Both endpoints are plain async functions wired into an
//! [Axum](https://docs.rs/axum) router by [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
