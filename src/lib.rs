// SPDX-License-Identifier: MIT

//! Steam profile client: fetch a player's recently played games and profile
//! summary from the Steam Web API, and keep the API key plus a bounded
//! history of looked-up Steam IDs across runs.
//!
//! The core is two collaborators:
//! - [`store::CredentialStore`] owns the durable credential state;
//! - [`services::SteamClient`] performs the two Web API lookups and
//!   normalizes the nested responses into flat display records.
//!
//! The binary in `main.rs` is a thin terminal frontend over both.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod time_utils;
