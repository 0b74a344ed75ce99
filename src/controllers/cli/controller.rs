use crate::controllers::cli::args::{CliArgs, ConfigSource};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render::errors::RendererError;
use crate::controllers::render::renderer::{DEFAULT_PREVIEW_SCALE, FractalRenderer};
use crate::controllers::render::types::RenderOutcome;
use crate::core::data::fractal_config::FractalConfig;
use crate::core::presets::zoom_display::{calculate_zoom_level, format_zoom_level};
use crate::presenters::memory::surface::MemorySurfaceFactory;
use crate::storage::preset_store::{PresetStore, PresetStoreError, find_preset};
use log::{debug, info};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum CliError {
    UnknownPreset(String),
    Presets(PresetStoreError),
    ReadConfig { path: PathBuf, source: io::Error },
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
    Render(RendererError),
    Superseded(u64),
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreset(id) => write!(f, "no preset with id '{}'", id),
            Self::Presets(err) => write!(f, "{}", err),
            Self::ReadConfig { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            Self::ParseConfig { path, source } => {
                write!(f, "config {} is not valid: {}", path.display(), source)
            }
            Self::Render(err) => write!(f, "{}", err),
            Self::Superseded(generation) => {
                write!(f, "render {} was cancelled before it finished", generation)
            }
            Self::Write { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownPreset(_) | Self::Superseded(_) => None,
            Self::Presets(err) => Some(err),
            Self::ReadConfig { source, .. } => Some(source),
            Self::ParseConfig { source, .. } => Some(source),
            Self::Render(err) => Some(err),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<PresetStoreError> for CliError {
    fn from(err: PresetStoreError) -> Self {
        Self::Presets(err)
    }
}

impl From<RendererError> for CliError {
    fn from(err: RendererError) -> Self {
        Self::Render(err)
    }
}

/// Renders a single frame headlessly and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn resolve_config(&self, args: &CliArgs) -> Result<FractalConfig, CliError> {
        match &args.source {
            ConfigSource::Defaults => Ok(FractalConfig::default()),
            ConfigSource::Preset(id) => {
                let store = args.presets_path.as_deref().map(PresetStore::new);
                let preset = find_preset(id, store.as_ref())?
                    .ok_or_else(|| CliError::UnknownPreset(id.clone()))?;

                info!("Using preset '{}' ({})", preset.id, preset.name);
                Ok(preset.to_config())
            }
            ConfigSource::File(path) => read_config(path),
        }
    }

    pub fn run(&self, args: &CliArgs) -> Result<RenderOutcome, CliError> {
        let config = self.resolve_config(args)?;

        info!("Rendering Mandelbrot set...");
        info!("Image size: {}x{}", config.width, config.height);
        info!("Max iterations: {}", config.max_iterations);
        info!("Colour scheme: {}", config.colour_scheme);
        info!(
            "Zoom: {}x",
            format_zoom_level(calculate_zoom_level(&config.bounds))
        );

        let renderer = FractalRenderer::new(&MemorySurfaceFactory::new())?;

        let outcome = if args.preview {
            renderer.render_preview(&config, DEFAULT_PREVIEW_SCALE)?
        } else {
            renderer.render(&config, |progress| {
                debug!("progress {:.0}%", progress * 100.0);
            })?
        };

        match outcome {
            RenderOutcome::Completed { duration, .. } => info!("Duration: {:?}", duration),
            RenderOutcome::Cancelled { generation } => {
                return Err(CliError::Superseded(generation));
            }
        }

        self.presenter
            .present(&renderer.snapshot(), &args.out)
            .map_err(|source| CliError::Write {
                path: args.out.clone(),
                source,
            })?;

        Ok(outcome)
    }
}

fn read_config(path: &Path) -> Result<FractalConfig, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| CliError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPresenter {
        written: Mutex<Vec<(PathBuf, u32, u32)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, frame: &PixelBuffer, filepath: &Path) -> io::Result<()> {
            self.written.lock().unwrap().push((
                filepath.to_path_buf(),
                frame.width(),
                frame.height(),
            ));
            Ok(())
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cli-{}-{}", std::process::id(), name))
    }

    #[test]
    fn defaults_resolve_to_default_config() {
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter);

        let config = controller.resolve_config(&CliArgs::default()).unwrap();

        assert_eq!(config, FractalConfig::default());
        assert_eq!(config.max_iterations, 100);
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.colour_scheme, ColourSchemeKind::Classic);
    }

    #[test]
    fn builtin_preset_resolves() {
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter);
        let args = CliArgs {
            source: ConfigSource::Preset("lightning".to_string()),
            ..CliArgs::default()
        };

        let config = controller.resolve_config(&args).unwrap();

        assert_eq!(config.max_iterations, 300);
        assert_eq!(config.colour_scheme, ColourSchemeKind::Fire);
    }

    #[test]
    fn unknown_preset_is_reported() {
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter);
        let args = CliArgs {
            source: ConfigSource::Preset("atlantis".to_string()),
            ..CliArgs::default()
        };

        assert!(matches!(
            controller.resolve_config(&args),
            Err(CliError::UnknownPreset(id)) if id == "atlantis"
        ));
    }

    #[test]
    fn config_file_with_partial_fields_uses_defaults() {
        let path = temp_path("partial.json");
        fs::write(&path, r#"{"max_iterations": 50, "colour_scheme": "ocean"}"#).unwrap();
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter);
        let args = CliArgs {
            source: ConfigSource::File(path.clone()),
            ..CliArgs::default()
        };

        let config = controller.resolve_config(&args).unwrap();

        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.colour_scheme, ColourSchemeKind::Ocean);
        assert_eq!(config.width, 800);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_config_file_is_reported() {
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter);
        let args = CliArgs {
            source: ConfigSource::File(temp_path("does-not-exist.json")),
            ..CliArgs::default()
        };

        assert!(matches!(
            controller.resolve_config(&args),
            Err(CliError::ReadConfig { .. })
        ));
    }

    #[test_log::test]
    fn run_renders_and_presents_the_frame() {
        let path = temp_path("small.json");
        fs::write(&path, r#"{"width": 40, "height": 30}"#).unwrap();
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter);
        let args = CliArgs {
            source: ConfigSource::File(path.clone()),
            out: PathBuf::from("unused.ppm"),
            ..CliArgs::default()
        };

        let outcome = controller.run(&args).unwrap();

        assert!(outcome.is_completed());
        assert_eq!(
            *presenter.written.lock().unwrap(),
            vec![(PathBuf::from("unused.ppm"), 40, 30)]
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn invalid_config_fails_the_run() {
        let path = temp_path("zero.json");
        fs::write(&path, r#"{"width": 0}"#).unwrap();
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter);
        let args = CliArgs {
            source: ConfigSource::File(path.clone()),
            ..CliArgs::default()
        };

        assert!(matches!(
            controller.run(&args),
            Err(CliError::Render(RendererError::InvalidConfig(_)))
        ));
        assert!(presenter.written.lock().unwrap().is_empty());

        fs::remove_file(&path).unwrap();
    }
}
