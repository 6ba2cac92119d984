use clap::{Parser, Subcommand};
use image_compressor::config::{self, CONFIG_FILE_NAME};
use image_compressor::imaging::{self, CompressRequest, RustBackend};
use image_compressor::output;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "image-compressor")]
#[command(about = "Resize and recompress an image to fit a bounding box")]
#[command(long_about = "\
Resize and recompress an image to fit a bounding box

The image is scaled down uniformly until it fits inside --max-width x
--max-height (never enlarged), resampled with area averaging, and written
as JPEG at --quality. An output extension of .png, .bmp, .tif/.tiff or
.webp selects that format instead; quality then has no effect.

Defaults (quality 85, 1920x1080) can be changed in image-compressor.toml.
Run 'image-compressor gen-config' to print a documented one.

Set RUST_LOG (e.g. RUST_LOG=debug) or pass --verbose for diagnostics.")]
#[command(version)]
struct Cli {
    /// Config file with default settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log decode/resize/encode details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct CompressArgs {
    /// Image to read (JPEG, PNG, BMP, TIFF, WebP)
    input: PathBuf,

    /// Where to write the compressed copy
    output: PathBuf,

    /// JPEG quality, 1-100 [default: 85]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
    quality: Option<u32>,

    /// Maximum output width in pixels [default: 1920]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_width: Option<u32>,

    /// Maximum output height in pixels [default: 1080]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_height: Option<u32>,

    /// Show the planned output size without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Resize and recompress one image
    Compress(CompressArgs),
    /// Print a stock image-compressor.toml with all options documented
    GenConfig,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Compress(args) => {
            let config_path = cli
                .config
                .clone()
                .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
            let flags = config::flag_overrides(args.quality, args.max_width, args.max_height);
            let settings = match config::load_config(&config_path, cli.config.is_some(), flags) {
                Ok(config) => config.defaults,
                Err(err) => {
                    output::print_config_error(&err);
                    return Ok(ExitCode::FAILURE);
                }
            };

            let backend = RustBackend::new();
            let result = CompressRequest::new(&args.input, &args.output, &settings).and_then(
                |request| {
                    if args.dry_run {
                        imaging::preview_compression(&backend, &request)
                    } else {
                        imaging::compress_image(&backend, &request)
                    }
                },
            );

            match result {
                Ok(report) if args.json => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                Ok(report) if args.dry_run => output::print_plan(&report),
                Ok(report) => output::print_success(&report),
                Err(err) => {
                    output::print_error(&err);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
