use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use engine::{
    resolve_app_paths, AppPaths, Game, LoopConfig, SpriteSheet, SpriteSheetError, StartupError,
};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use super::gameplay::{GameLoop, HorizontalMotion, Tuning, SCREEN_HEIGHT, SCREEN_WIDTH};

const MOTION_ENV_VAR: &str = "RUNNER_MOTION";
const SPRITE_SHEET_ENV_VAR: &str = "RUNNER_SPRITE_SHEET";
const TUNING_FILE: &str = "runner_tuning.json";
const WINDOW_TITLE: &str = "Animation (Runner Demo)";

#[derive(Debug, Error)]
pub(crate) enum LaunchError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error(transparent)]
    SpriteSheet(#[from] SpriteSheetError),
}

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) game: Box<dyn Game>,
}

pub(crate) fn build_app() -> Result<AppWiring, LaunchError> {
    init_tracing();
    info!("=== Runner Startup ===");

    let app_paths = resolve_app_paths()?;
    info!(
        root = %app_paths.root.display(),
        assets_dir = %app_paths.assets_dir.display(),
        "startup"
    );

    let motion = motion_from_env();
    let tuning = load_tuning_or_default(&app_paths.assets_dir.join(TUNING_FILE));
    let sheet = load_sprite_sheet(&sprite_sheet_path(&app_paths), &tuning)?;
    info!(%motion, zoom = tuning.zoom, frame_count = tuning.frame_count, "game_configured");

    let config = LoopConfig {
        window_title: WINDOW_TITLE.to_string(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        ..LoopConfig::default()
    };

    Ok(AppWiring {
        config,
        game: Box::new(GameLoop::new(Arc::new(sheet), motion, tuning)),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

/// Loads the sheet and checks the whole animation strip is inside it, so
/// per-frame blits never sample outside the image.
fn load_sprite_sheet(path: &Path, tuning: &Tuning) -> Result<SpriteSheet, SpriteSheetError> {
    let sheet = SpriteSheet::load(path)?;
    sheet.ensure_contains(tuning.strip_rect())?;
    info!(
        path = %path.display(),
        width = sheet.width(),
        height = sheet.height(),
        "sprite_sheet_loaded"
    );
    Ok(sheet)
}

fn sprite_sheet_path(app_paths: &AppPaths) -> PathBuf {
    env::var_os(SPRITE_SHEET_ENV_VAR)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| default_sprite_sheet_path(&app_paths.assets_dir))
}

fn default_sprite_sheet_path(assets_dir: &Path) -> PathBuf {
    assets_dir.join("img").join("runner.png")
}

fn motion_from_env() -> HorizontalMotion {
    parse_motion(env::var(MOTION_ENV_VAR).ok().as_deref())
}

fn parse_motion(raw: Option<&str>) -> HorizontalMotion {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return HorizontalMotion::default();
    };
    raw.parse().unwrap_or_else(|error: String| {
        warn!(
            env_var = MOTION_ENV_VAR,
            value = raw,
            error = error.as_str(),
            "invalid motion env var value; falling back to default"
        );
        HorizontalMotion::default()
    })
}

fn load_tuning_or_default(path: &Path) -> Tuning {
    match Tuning::load(path) {
        Ok(Some(tuning)) => {
            info!(path = %path.display(), "tuning_loaded");
            tuning
        }
        Ok(None) => Tuning::default(),
        Err(error) => {
            warn!(
                path = %path.display(),
                error = error.as_str(),
                "tuning_rejected_using_defaults"
            );
            Tuning::default()
        }
    }
}
