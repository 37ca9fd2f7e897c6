// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Daily Prices - FinMind Client Library
//!
//! Minimal client for the FinMind open-data API, covering the one dataset
//! the downloader needs: Taiwan stock daily prices.
//!
//! - `client`: `FinMindClient` with optional token login
//! - `api_types`: Response envelope and `DailyPrice` rows
//! - `token`: Reads the `~/.finMind` token file

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod api_types;
pub mod client;
pub mod config;
pub mod error;
pub mod token;

pub use api_types::DailyPrice;
pub use client::FinMindClient;
pub use config::FinMindConfig;
pub use error::FinMindError;
pub use token::{TOKEN_FILE_NAME, default_token_path, load_token};
