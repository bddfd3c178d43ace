//! gzkit - gzip compression from the command line
//!
//! Compresses files to `FILE.gz`, restores them, or transcodes standard input
//! to standard output.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gzkit_codec::{GzipCodec, TranscodeStats};
use gzkit_config::{Config, ConfigFormat, ConfigLoader};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

mod display;
mod json_output;

use display::{create_spinner, display_file_summary, display_pipe_summary, display_success};
use json_output::FileResultJson;

/// gzkit - gzip compression from the command line
#[derive(Parser)]
#[command(
    name = "gzkit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compress and decompress files in the gzip format",
    long_about = "gzkit compresses each FILE to FILE.gz and restores FILE.gz to FILE.\n\
                  Existing outputs are never overwritten, and the first failure stops the run."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Quiet mode - no per-file summary
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose mode - detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print per-file results as JSON lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress each FILE to FILE.gz
    Compress {
        /// Files to compress
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Decompress each FILE.gz to FILE
    Decompress {
        /// Files to decompress, each ending in .gz
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Transcode standard input to standard output
    Pipe {
        /// Decompress instead of compressing
        #[arg(short = 'D', long)]
        decompress: bool,
    },
    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "yaml", conflicts_with = "output")]
        format: FormatArg,
        /// Write the configuration to FILE instead of printing it
        ///
        /// The format follows the file extension. An existing file is kept.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum FormatArg {
    Yaml,
    Toml,
    Json,
}

impl From<FormatArg> for ConfigFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Yaml => ConfigFormat::Yaml,
            FormatArg::Toml => ConfigFormat::Toml,
            FormatArg::Json => ConfigFormat::Json,
        }
    }
}

/// How per-file results are reported
#[derive(Clone, Copy)]
struct OutputMode {
    quiet: bool,
    json: bool,
}

#[derive(Clone, Copy)]
enum Operation {
    Compress,
    Decompress,
}

impl Operation {
    const fn name(self) -> &'static str {
        match self {
            Self::Compress => "compress",
            Self::Decompress => "decompress",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.debug, cli.quiet, cli.verbose, &config)?;

    info!("gzkit v{} starting", env!("CARGO_PKG_VERSION"));

    let codec = GzipCodec::with_buffer_size(config.codec.buffer_size);
    let output = OutputMode {
        quiet: cli.quiet,
        json: cli.json,
    };

    match cli.command {
        Commands::Compress { files } => {
            files_command(&codec, Operation::Compress, &files, output)?;
        }
        Commands::Decompress { files } => {
            files_command(&codec, Operation::Decompress, &files, output)?;
        }
        Commands::Pipe { decompress } => {
            pipe_command(&codec, decompress, cli.quiet)?;
        }
        Commands::Config {
            default,
            output: Some(path),
            ..
        } => {
            save_config(&config, default, &path)?;
            if !cli.quiet {
                display_success(&format!("Configuration written to {}", path.display()));
            }
        }
        Commands::Config {
            default,
            format,
            output: None,
        } => {
            config_command(&config, default, format.into())?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => ConfigLoader::load_default().context("Failed to load configuration"),
    }
}

fn init_logging(debug: bool, quiet: bool, verbose: bool, config: &Config) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else if quiet {
        "error"
    } else {
        config.logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("Invalid log filter")?;

    // Logs share stderr with diagnostics so `pipe` output stays clean
    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    if config.logging.json_format {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

fn files_command(
    codec: &GzipCodec,
    operation: Operation,
    files: &[PathBuf],
    output: OutputMode,
) -> Result<()> {
    info!("Starting {} of {} file(s)", operation.name(), files.len());

    for input in files {
        let spinner = create_spinner(output.quiet || output.json, input);

        let result = match operation {
            Operation::Compress => codec.compress_file(input),
            Operation::Decompress => codec.decompress_file(input),
        };

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let (destination, stats) = result.with_context(|| {
            format!("Failed to {} {}", operation.name(), input.display())
        })?;

        report(operation, input, &destination, &stats, output)?;
    }

    Ok(())
}

fn report(
    operation: Operation,
    input: &Path,
    destination: &Path,
    stats: &TranscodeStats,
    output: OutputMode,
) -> Result<()> {
    if output.json {
        let line = FileResultJson::new(operation.name(), input, destination, stats);
        println!("{}", line.to_json_line()?);
    } else if !output.quiet {
        display_file_summary(input, destination, stats);
    }
    Ok(())
}

fn pipe_command(codec: &GzipCodec, decompress: bool, quiet: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let stats = if decompress {
        codec
            .decompress_stream(stdin.lock(), &mut writer)
            .context("Failed to decompress standard input")?
    } else {
        codec
            .compress_stream(stdin.lock(), &mut writer)
            .context("Failed to compress standard input")?
    };
    writer.flush().context("Failed to flush standard output")?;

    if !quiet {
        display_pipe_summary(&stats);
    }
    Ok(())
}

fn save_config(config: &Config, default: bool, path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let saved = if default {
        ConfigLoader::generate_default_config(path)
    } else {
        ConfigLoader::save_to_file(config, path)
    };
    saved.with_context(|| format!("Failed to write configuration to {}", path.display()))
}

fn config_command(config: &Config, default: bool, format: ConfigFormat) -> Result<()> {
    let shown = if default {
        Config::default()
    } else {
        config.clone()
    };

    let rendered = ConfigLoader::render(&shown, format).context("Failed to render configuration")?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_compress_requires_files() {
        assert!(Cli::try_parse_from(["gzkit", "compress"]).is_err());
    }

    #[rstest]
    #[case(&["gzkit", "-q", "compress", "a.txt", "b.txt"])]
    #[case(&["gzkit", "compress", "a.txt", "--quiet"])]
    fn test_parse_compress(#[case] args: &[&str]) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.quiet);
        match cli.command {
            Commands::Compress { files } => assert_eq!(files[0], PathBuf::from("a.txt")),
            _ => panic!("expected compress command"),
        }
    }

    #[test]
    fn test_parse_pipe_decompress() {
        let cli = Cli::try_parse_from(["gzkit", "pipe", "--decompress"]).unwrap();
        assert!(matches!(cli.command, Commands::Pipe { decompress: true }));
    }

    #[test]
    fn test_parse_config_output() {
        let cli = Cli::try_parse_from(["gzkit", "config", "-o", "gzkit.toml"]).unwrap();
        match cli.command {
            Commands::Config { output, .. } => assert_eq!(output, Some(PathBuf::from("gzkit.toml"))),
            _ => panic!("expected config command"),
        }
        assert!(Cli::try_parse_from(["gzkit", "config", "-o", "a.yaml", "--format", "json"]).is_err());
    }

    #[test]
    fn test_save_config_writes_loadable_file_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gzkit.toml");
        let mut config = Config::default();
        config.logging.level = "info".to_string();

        save_config(&config, false, &path).unwrap();
        assert_eq!(ConfigLoader::load_from_file(&path).unwrap(), config);

        assert!(save_config(&config, true, &path).is_err());
        assert_eq!(ConfigLoader::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_save_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gzkit.yaml");
        let mut config = Config::default();
        config.logging.level = "trace".to_string();

        save_config(&config, true, &path).unwrap();
        assert_eq!(ConfigLoader::load_from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_parse_config_format() {
        let cli = Cli::try_parse_from(["gzkit", "config", "--default", "--format", "toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                default: true,
                format: FormatArg::Toml,
                ..
            }
        ));
    }
}
