//! # CLI Module
//!
//! This module provides the command-line interface layer for spiritcli. It
//! implements all user-facing commands and coordinates between the Spotify
//! API services, data management, the taste scoring core, and the image
//! generation providers.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE security
//!
//! ### Playback History
//!
//! - [`update_recent`] - Fetches recently played tracks and resolves artist genres
//! - [`list_recent`] - Displays the cached playback history as a table
//!
//! ### Scoring
//!
//! - [`score`] - Computes the taste score, spirit animal category, and
//!   influence keyword from the cached history
//!
//! ### Portrait Generation
//!
//! - [`portrait`] - Builds a prompt from the scoring result and forwards it
//!   to an image generation provider, saving the returned portrait
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Data/Cache Management)
//!     ↓
//! API Layer (Spotify / Image Generation)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command delegates to the appropriate management and API modules
//! while handling user interaction, progress feedback, and error
//! presentation through the crate's output macros.

mod auth;
mod portrait;
mod recent;
mod score;

pub use auth::auth;
pub use portrait::portrait;
pub use recent::list_recent;
pub use recent::update_recent;
pub use score::score;
