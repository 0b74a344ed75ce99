use std::error::Error;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "output/mandelbrot.ppm";

pub const USAGE: &str = "usage: mandelbrot_explorer [--preset <id> | --config <file.json>] \
[--presets <file.json>] [--out <path>] [--preview]";

/// Where the frame's config comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Defaults,
    Preset(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub source: ConfigSource,
    pub out: PathBuf,
    pub presets_path: Option<PathBuf>,
    pub preview: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            source: ConfigSource::Defaults,
            out: PathBuf::from(DEFAULT_OUTPUT_PATH),
            presets_path: None,
            preview: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliArgsError {
    MissingValue(String),
    UnknownArgument(String),
    ConflictingSources,
}

impl fmt::Display for CliArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "{} expects a value\n{}", flag, USAGE),
            Self::UnknownArgument(arg) => write!(f, "unknown argument '{}'\n{}", arg, USAGE),
            Self::ConflictingSources => {
                write!(f, "--preset and --config cannot be combined\n{}", USAGE)
            }
        }
    }
}

impl Error for CliArgsError {}

/// Parses everything after the program name.
pub fn parse_args<I>(args: I) -> Result<CliArgs, CliArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| CliArgsError::MissingValue(flag.to_string()))
        };

        match arg.as_str() {
            "--preset" => {
                let id = value_for("--preset")?;
                parsed.source = match parsed.source {
                    ConfigSource::File(_) => return Err(CliArgsError::ConflictingSources),
                    _ => ConfigSource::Preset(id),
                };
            }
            "--config" => {
                let path = value_for("--config")?;
                parsed.source = match parsed.source {
                    ConfigSource::Preset(_) => return Err(CliArgsError::ConflictingSources),
                    _ => ConfigSource::File(PathBuf::from(path)),
                };
            }
            "--out" => parsed.out = PathBuf::from(value_for("--out")?),
            "--presets" => parsed.presets_path = Some(PathBuf::from(value_for("--presets")?)),
            "--preview" => parsed.preview = true,
            other => return Err(CliArgsError::UnknownArgument(other.to_string())),
        }
    }

    Ok(parsed)
}
