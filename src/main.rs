// SPDX-License-Identifier: MPL-2.0
use embed_player::app::paths;
use embed_player::app::StateFileStore;
use embed_player::application::port::{MetadataSource, PreferenceStore};
use embed_player::config;
use embed_player::domain::video::{format_time, LoadedVideo, MediaId};
use embed_player::error::{Error, Result};
use embed_player::infrastructure::VkApiClient;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: embed_player --owner-id <N> --id <N> [OPTIONS]

Fetches a video's metadata and prints what the player would load.

Options:
  --token <TOKEN>        API access token (overrides settings.toml)
  --api-version <VER>    API version (overrides settings.toml)
  --data-dir <PATH>      Directory holding the persisted player state
  --config-dir <PATH>    Directory holding settings.toml
  -h, --help             Print this help";

struct Flags {
    media_id: MediaId,
    token: Option<String>,
    api_version: Option<String>,
    data_dir: Option<String>,
    config_dir: Option<String>,
}

fn parse_flags(mut args: pico_args::Arguments) -> std::result::Result<Flags, pico_args::Error> {
    let owner_id: i64 = args.value_from_str("--owner-id")?;
    let id: i64 = args.value_from_str("--id")?;
    Ok(Flags {
        media_id: MediaId::new(owner_id, id),
        token: args.opt_value_from_str("--token")?,
        api_version: args.opt_value_from_str("--api-version")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

fn print_summary(loaded: &LoadedVideo, volume: f32) {
    let video = &loaded.video;
    println!("Title:    {}", video.title);
    match &loaded.author {
        Some(author) => println!("Author:   {} <{}>", author.name, author.profile_url),
        None => println!("Author:   -"),
    }
    println!("Duration: {}", format_time(video.duration_secs));
    println!("Watch:    {}", video.watch_url());
    if let Some(poster) = &video.poster_url {
        println!("Poster:   {poster}");
    }
    match video.quality_levels.preferred() {
        Some(label) => println!("Quality:  {label}"),
        None => println!("Quality:  no MP4 source"),
    }
    for label in video.quality_levels.labels() {
        if let Some(url) = video.quality_levels.get(label) {
            println!("  {label:>4}  {url}");
        }
    }
    println!("Volume:   {:.0}%", volume * 100.0);
}

async fn run(flags: Flags) -> Result<()> {
    paths::init_cli_overrides(flags.data_dir, flags.config_dir);
    let config = config::load()?;

    let token = flags.token.or_else(|| config.api.access_token.clone());
    let version = flags
        .api_version
        .unwrap_or_else(|| config.api_version().to_string());

    let client = VkApiClient::new(Some(&version), token.as_deref())?;
    let loaded = client.fetch(flags.media_id).await?;
    if loaded.video.media_id != flags.media_id {
        log::warn!(
            "Requested {} but the response describes {}",
            flags.media_id,
            loaded.video.media_id
        );
    }

    let volume = StateFileStore::open().load_volume().unwrap_or_default();
    print_summary(&loaded, volume.value());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(flags).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Metadata(err)) => {
            log::error!("Metadata request failed: {err}");
            eprintln!("Could not load video: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
