use crate::{
    addon::{
        config::load_addons_config,
        publish::{PublishRun, filter_game_versions},
        summary::print_run_summary,
    },
    curseforge::client::CurseForgeClient,
    types::{
        curseforge::ReleaseType,
        settings::{
            DEFAULT_BOUNDARY, DEFAULT_CHANGELOG_URL, DEFAULT_CONFIG_PATH,
            DEFAULT_GAME_VERSION_TYPE_ID, PublishSettings,
        },
    },
    utils::{
        api::get_curseforge_api_base_url,
        auth::{FALLBACK_TOKEN_VAR, PRIMARY_TOKEN_VAR, load_api_token},
        logger::{LogLevel, Logger},
        signature::get_signature,
        spinner::with_spinner,
        version::get_version,
    },
};
use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

mod addon;
mod curseforge;
mod types;
mod utils;

#[derive(Parser)]
#[command(name = "cfpublish")]
#[command(author = "Labscend Studios")]
#[command(about = "Upload packaged addon zips to CurseForge")]
struct Cli {
    /// Directory holding the packaged `<name>-<version>.zip` archives
    dist_dir: PathBuf,

    /// Release version, used for archive names, display names and the changelog link
    #[arg(value_name = "VERSION")]
    release: String,

    /// Addon configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// CurseForge upload API base URL (defaults to $CURSEFORGE_API_URL, then the public API)
    #[arg(long)]
    api_url: Option<String>,

    /// Game version type whose versions are used as upload targets
    #[arg(long, default_value_t = DEFAULT_GAME_VERSION_TYPE_ID)]
    game_version_type: i64,

    /// Release channel of the uploaded file
    #[arg(long, value_enum, default_value_t = ReleaseType::Release)]
    release_type: ReleaseType,

    /// Changelog link; `{version}` is replaced with the release version
    #[arg(long, default_value = DEFAULT_CHANGELOG_URL)]
    changelog_url: String,
}

impl Cli {
    fn settings(&self) -> PublishSettings {
        PublishSettings {
            api_base_url: self
                .api_url
                .as_deref()
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(get_curseforge_api_base_url),
            game_version_type_id: self.game_version_type,
            boundary: DEFAULT_BOUNDARY.to_string(),
            changelog_url_template: self.changelog_url.clone(),
            release_type: self.release_type,
            config_path: self.config.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let version = get_version();
    let signature = get_signature(&version);

    let version_static: &'static str = Box::leak(format!("v{}", version).into_boxed_str());
    let signature_static: &'static str = Box::leak(signature.into_boxed_str());

    let cmd = Cli::command()
        .version(version_static)
        .before_help(signature_static);

    let cli = match cmd
        .try_get_matches()
        .and_then(|matches| Cli::from_arg_matches(&matches))
    {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            Logger::new().log_message(LogLevel::Error, &format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let logger = Logger::new();

    let Some(token) = load_api_token() else {
        logger.log_message(
            LogLevel::Warning,
            &format!(
                "{} / {} not set, skipping CurseForge upload.",
                FALLBACK_TOKEN_VAR, PRIMARY_TOKEN_VAR
            ),
        );
        return Ok(ExitCode::SUCCESS);
    };

    let settings = cli.settings();
    let config = load_addons_config(&settings.config_path)?;

    let client = CurseForgeClient::new(&settings.api_base_url, &token)
        .context("Failed to build HTTP client")?;

    let spinner = with_spinner(&format!(
        "Fetching CurseForge game versions (typeID={})...",
        settings.game_version_type_id
    ));
    let versions = client.get_game_versions().await;
    spinner.finish_and_clear();
    let versions = versions.with_context(|| {
        format!("Failed to fetch game versions from {}", client.base_url())
    })?;

    let target_versions = filter_game_versions(&versions, settings.game_version_type_id);
    let preview: Vec<String> = versions
        .iter()
        .filter_map(|v| {
            v.id_for_type(settings.game_version_type_id)
                .map(|id| (id, v.name.as_deref().or(v.slug.as_deref())))
        })
        .take(5)
        .map(|(id, label)| match label {
            Some(label) => format!("{} ({})", id, label),
            None => id.to_string(),
        })
        .collect();
    logger.log_message(
        LogLevel::Info,
        &format!(
            "Found {} game version ID(s) for typeID {}: [{}]",
            target_versions.len(),
            settings.game_version_type_id,
            preview.join(", ")
        ),
    );
    if target_versions.is_empty() {
        logger.log_message(
            LogLevel::Warning,
            &format!(
                "No game versions found for typeID {}; uploads will not name a game version.",
                settings.game_version_type_id
            ),
        );
    }

    let publish = PublishRun {
        client: &client,
        settings: &settings,
        dist_dir: &cli.dist_dir,
        version: &cli.release,
    };
    let summary = publish.publish_all(&config.addons, &target_versions).await;
    print_run_summary(&summary);

    Ok(if summary.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
