//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by
//! spiritcli: the OAuth 2.0 PKCE authentication flow and retrieval of the
//! user's recently played tracks together with artist genre metadata. It
//! handles all HTTP communication, token exchange, error handling, and
//! rate limiting for these operations.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 PKCE (Proof Key for Code Exchange) flow:
//! - **Complete Auth Flow**: From authorization request to token storage
//! - **PKCE Security**: Cryptographically secure authentication without client secrets
//! - **Token Management**: Refresh and expiration handling via [`crate::management::TokenManager`]
//! - **Browser Integration**: Automatic browser launch for user authorization
//! - **Local Callback Server**: Temporary HTTP server for receiving OAuth callbacks
//!
//! ### History Module
//!
//! [`history`] - Handles playback-history API operations:
//! - **Recently Played**: Retrieval of the user's recent plays (up to 50)
//! - **Genre Resolution**: Batched artist lookups to resolve genre tags
//! - **Rate Limiting**: Honors `Retry-After` on 429 responses
//! - **Retry Logic**: Automatic retry on transient 502 Bad Gateway errors
//!
//! ## API Coverage
//!
//! - `GET /me/player/recently-played` - Recent playback history
//! - `GET /artists` - Batched artist metadata (genres)
//! - `POST /api/token` - Token exchange and refresh operations
//!
//! ## Error Types
//!
//! All functions return `Result` types with specific error handling:
//! - **`reqwest::Error`** - HTTP client errors, network issues, API errors
//! - **`String`** - Authentication and token management errors

pub mod auth;
pub mod history;
