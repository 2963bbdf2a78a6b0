// SPDX-License-Identifier: MIT

//! Terminal frontend for the Steam profile client.
//!
//! Collects the API key and Steam ID, fetches the profile summary and
//! recent activity, and renders the normalized records as labeled rows.
//! After a successful fetch the credentials and history are written back
//! to the data file.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use steam_profile_client::{
    config::Config,
    models::{
        format_minutes, total_minutes_last_period, ActivityRecord, CredentialRecord,
        ProfileSummary,
    },
    services::{normalize_activity, normalize_summary, ImageFetcher, SteamClient},
    store::CredentialStore,
};
use tracing_subscriber::EnvFilter;

/// Maximum accepted API key length.
const API_KEY_MAX_LEN: usize = 32;

/// Maximum accepted Steam ID length.
const STEAM_ID_MAX_LEN: usize = 17;

#[derive(Parser)]
#[command(name = "steam-profile-client", about = "Fetch player info from the Steam Web API")]
struct Args {
    /// Steam ID to look up; omit to list the stored lookup history
    #[arg(long)]
    steam_id: Option<String>,

    /// Steam Web API key; falls back to STEAM_API_KEY, then the stored key
    #[arg(long)]
    api_key: Option<String>,

    /// Credential data file (default: data/data.json)
    #[arg(long)]
    data_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(path) = args.data_path {
        config.data_path = path;
    }

    let store = CredentialStore::new(&config.data_path);
    let record = store.load();

    let Some(steam_id) = args.steam_id else {
        print_history(&record);
        return Ok(());
    };

    let api_key = resolve_api_key(args.api_key, config.api_key.clone(), &record.api_key);
    if api_key.is_empty() {
        bail!("No API key: pass --api-key, set STEAM_API_KEY, or run once with a key to store it");
    }
    if api_key.len() > API_KEY_MAX_LEN {
        bail!("API key is longer than {} characters", API_KEY_MAX_LEN);
    }
    if steam_id.len() > STEAM_ID_MAX_LEN {
        bail!("Steam ID is longer than {} characters", STEAM_ID_MAX_LEN);
    }

    let client = SteamClient::new(api_key.clone(), config.request_timeout_secs);

    let raw_summary = client
        .get_player_summaries(&steam_id)
        .await
        .context("Profile summary lookup failed")?;
    let raw_activity = client
        .get_recently_played_games(&steam_id)
        .await
        .context("Recent activity lookup failed")?;

    let summary = match normalize_summary(&raw_summary) {
        Ok(summary) => summary,
        Err(e) if e.is_profile_unavailable() => {
            bail!("No access to this data! This profile is private or does not exist.");
        }
        Err(e) => return Err(e.into()),
    };
    let records = normalize_activity(&raw_activity);

    render_response(&summary, &records, &config).await;

    // Write-through: persist key and history only after a successful fetch.
    let mut updated = record.remember(&steam_id, &summary.display_name);
    updated.api_key = api_key;
    if let Err(e) = store.save(&updated) {
        tracing::error!(error = %e, "Failed to persist credentials");
        eprintln!("Warning: lookup history was not saved: {}", e);
    }

    Ok(())
}

/// Print the stored lookup history, most recent last.
fn print_history(record: &CredentialRecord) {
    if record.user_data.is_empty() {
        println!("No stored lookups yet. Run with --steam-id to add one.");
        return;
    }
    println!("Stored lookups:");
    for entry in &record.user_data {
        println!("  {:17}  {}", entry.steam_id, entry.username);
    }
}

/// Render the profile summary and activity rows.
async fn render_response(summary: &ProfileSummary, records: &[ActivityRecord], config: &Config) {
    let images = ImageFetcher::new(config.request_timeout_secs);

    // Avatar plus all icons in one parallel batch; order matches input.
    let mut urls = vec![summary.avatar_url.clone()];
    urls.extend(records.iter().map(|r| r.icon_url.clone()));
    let bytes = images.fetch_all(&urls).await;

    println!(
        "{} {}   Status: {}   Last Time Seen: {}",
        image_marker(&bytes[0]),
        summary.display_name,
        summary.status,
        summary.last_seen
    );
    println!("{}", "-".repeat(72));

    if records.is_empty() {
        println!("No Games Found");
        return;
    }

    let title_width = records.iter().map(|r| r.title.len()).max().unwrap_or(0);
    println!(
        "      {:title_width$}  {:>12}  {:>12}",
        "", "Last 2 Weeks", "Overall"
    );
    for (record, icon) in records.iter().zip(&bytes[1..]) {
        println!(
            "{} {:title_width$}  {:>12}  {:>12}",
            image_marker(icon),
            record.title,
            record.format_last_period(),
            record.format_lifetime()
        );
    }
    println!("{}", "-".repeat(72));
    println!(
        "Total last 2 weeks: {}",
        format_minutes(total_minutes_last_period(records))
    );
}

/// Terminal stand-in for an image cell: fetched bytes or a "no image" mark.
fn image_marker(bytes: &Option<Vec<u8>>) -> &'static str {
    match bytes {
        Some(_) => "[img]",
        None => "[ - ]",
    }
}

/// Key precedence: command line, then environment, then the stored record.
///
/// The environment key is passed by value so resolving never consumes the
/// surrounding config.
fn resolve_api_key(cli: Option<String>, env: Option<String>, stored: &str) -> String {
    cli.or(env).unwrap_or_else(|| stored.to_string())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("steam_profile_client=info,warn")),
        )
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_key_precedence() {
        let cli = Some("cli_key".to_string());
        let env = Some("env_key".to_string());

        assert_eq!(resolve_api_key(cli.clone(), env.clone(), "stored_key"), "cli_key");
        assert_eq!(resolve_api_key(None, env, "stored_key"), "env_key");
        assert_eq!(resolve_api_key(None, None, "stored_key"), "stored_key");
        // No key anywhere resolves to empty, which main rejects
        assert_eq!(resolve_api_key(None, None, ""), "");
    }

    #[test]
    fn test_resolve_api_key_leaves_config_usable() {
        let config = Config {
            api_key: Some("env_key".to_string()),
            ..Config::default()
        };
        let key = resolve_api_key(None, config.api_key.clone(), "");
        assert_eq!(key, "env_key");
        // The config still owns its key after resolution
        assert_eq!(config.api_key.as_deref(), Some("env_key"));
    }
}
