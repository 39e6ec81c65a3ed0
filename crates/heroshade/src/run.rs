use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pageconfig::PageConfig;
use presets::ShaderVariant;
use renderer::{MediaPanelConfig, Renderer, RendererConfig};
use sequencer::GateTiming;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::content;
use crate::paths::AppPaths;

pub fn run(args: Cli) -> Result<()> {
    initialise_tracing();

    let (config, config_dir) = load_page_config(args.run.config.as_deref())?;

    match &args.command {
        Some(Command::Variants) => {
            content::print_variants();
            Ok(())
        }
        Some(Command::Content) => {
            content::print_content(&config);
            Ok(())
        }
        None => {
            let renderer_config = build_renderer_config(&args, &config, config_dir.as_deref())?;
            tracing::info!(
                variant = %renderer_config.variant,
                width = renderer_config.window_size.0,
                height = renderer_config.window_size.1,
                "starting heroshade"
            );
            Renderer::new(renderer_config).run()
        }
    }
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Loads the page config: explicit `--config` path, else the user config
/// file when it exists, else the built-in page. Returns the directory the
/// config came from so relative asset paths resolve beside it.
fn load_page_config(explicit: Option<&Path>) -> Result<(PageConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = PageConfig::load(path)
            .with_context(|| format!("failed to load page config at {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded page config");
        return Ok((config, parent_of(path)));
    }

    let paths = AppPaths::discover()?;
    let default_path = paths.page_config();
    if default_path.exists() {
        let config = PageConfig::load(&default_path).with_context(|| {
            format!("failed to load page config at {}", default_path.display())
        })?;
        tracing::info!(path = %default_path.display(), "loaded page config");
        return Ok((config, parent_of(&default_path)));
    }

    tracing::debug!("no page config found; using the built-in page");
    Ok((PageConfig::default(), None))
}

fn parent_of(path: &Path) -> Option<PathBuf> {
    path.parent().map(|parent| parent.to_path_buf())
}

/// Merges CLI overrides onto the page config and resolves everything the
/// renderer needs up-front, so bad inputs fail here rather than mid-frame.
fn build_renderer_config(
    args: &Cli,
    page: &PageConfig,
    config_dir: Option<&Path>,
) -> Result<RendererConfig> {
    let variant = match args.run.variant {
        Some(variant) => variant,
        None => page
            .hero
            .variant
            .parse::<ShaderVariant>()
            .with_context(|| format!("invalid hero.variant '{}'", page.hero.variant))?,
    };

    let cover_rgb = page
        .gate
        .cover_rgb()
        .context("invalid gate.cover_color")?;

    let poster_path = page.media.poster.as_ref().map(|poster| {
        if poster.is_absolute() {
            poster.clone()
        } else {
            match config_dir {
                Some(dir) => dir.join(poster),
                None => poster.clone(),
            }
        }
    });

    let defaults = RendererConfig::default();
    Ok(RendererConfig {
        window_size: args.run.size.unwrap_or(defaults.window_size),
        window_title: page.page.title.clone(),
        variant,
        pixel_ratio_cap: args
            .run
            .pixel_ratio_cap
            .unwrap_or(page.hero.pixel_ratio_cap),
        cover_rgb,
        gate: GateTiming {
            hold: page.gate.hold,
            fade: page.gate.fade,
        },
        media: MediaPanelConfig {
            source_url: page.media.source.clone(),
            poster_path,
            duration: page.media.duration,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::RunArgs;
    use std::time::Duration;

    fn cli_with(run: RunArgs) -> Cli {
        Cli { run, command: None }
    }

    fn bare_args() -> RunArgs {
        RunArgs {
            variant: None,
            config: None,
            size: None,
            pixel_ratio_cap: None,
        }
    }

    #[test]
    fn builds_renderer_config_from_the_default_page() {
        let args = cli_with(bare_args());
        let config = build_renderer_config(&args, &PageConfig::default(), None).unwrap();
        assert_eq!(config.variant, ShaderVariant::LiquidMesh);
        assert_eq!(config.pixel_ratio_cap, 2.0);
        assert_eq!(config.gate.hold, Duration::from_millis(1000));
        assert_eq!(config.gate.fade, Duration::from_millis(200));
        // #009869
        assert!(config.cover_rgb[0].abs() < f32::EPSILON);
        assert!((config.cover_rgb[1] - 152.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn cli_variant_overrides_the_page() {
        let mut run = bare_args();
        run.variant = Some(ShaderVariant::Plasma);
        run.size = Some((640, 360));
        run.pixel_ratio_cap = Some(1.0);
        let config = build_renderer_config(&cli_with(run), &PageConfig::default(), None).unwrap();
        assert_eq!(config.variant, ShaderVariant::Plasma);
        assert_eq!(config.window_size, (640, 360));
        assert_eq!(config.pixel_ratio_cap, 1.0);
    }

    #[test]
    fn unknown_page_variant_is_an_error() {
        let mut page = PageConfig::default();
        page.hero.variant = "nonsense".into();
        let err = build_renderer_config(&cli_with(bare_args()), &page, None).unwrap_err();
        assert!(err.to_string().contains("hero.variant"));
    }

    #[test]
    fn relative_posters_resolve_beside_the_config_file() {
        let page = PageConfig::default();
        let config = build_renderer_config(
            &cli_with(bare_args()),
            &page,
            Some(Path::new("/etc/heroshade")),
        )
        .unwrap();
        assert_eq!(
            config.media.poster_path,
            Some(PathBuf::from("/etc/heroshade/thumbnail.png"))
        );
    }

    #[test]
    fn explicit_config_files_load_and_merge() {
        use std::io::Write;
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("page.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        write!(file, "[hero]\nvariant = \"aurora\"\n[gate]\nhold = \"1500ms\"\n").expect("write");

        let (page, config_dir) = load_page_config(Some(&path)).expect("load");
        assert_eq!(page.hero.variant, "aurora");
        assert_eq!(page.gate.hold, Duration::from_millis(1500));
        assert_eq!(config_dir.as_deref(), Some(dir.path()));
    }
}
