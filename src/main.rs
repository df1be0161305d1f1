//! Nonogram Viewer - terminal client for a remote nonogram solving service
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use nonogram_api::CatalogEndpoint;
use nonogram_app::config;
use nonogram_core::PuzzleId;
use nonogram_viewer::Overrides;

/// Nonogram Viewer - browse built-in puzzles and view their solutions
#[derive(Parser, Debug)]
#[command(name = "nonoview")]
#[command(about = "Terminal viewer for nonogram puzzles solved by a remote service", long_about = None)]
struct Args {
    /// Base URL of the solving service API
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Route that lists the built-in puzzles
    #[arg(long, value_enum, value_name = "ROUTE")]
    catalog_endpoint: Option<CatalogArg>,

    /// Cell size in pixels (12-40)
    #[arg(long, value_name = "PX")]
    cell_size: Option<u16>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file to the config directory and exit
    #[arg(long)]
    init_config: bool,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Solve one puzzle and exit (headless only)
    #[arg(long, value_name = "ID", requires = "headless")]
    solve: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CatalogArg {
    /// GET {base}/builtin/list
    BuiltinList,
    /// GET {base}/puzzles
    Puzzles,
}

impl From<CatalogArg> for CatalogEndpoint {
    fn from(arg: CatalogArg) -> Self {
        match arg {
            CatalogArg::BuiltinList => CatalogEndpoint::BuiltinList,
            CatalogArg::Puzzles => CatalogEndpoint::Puzzles,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let dir = config::default_config_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("No config directory on this platform"))?;
        let path = config::init_config_file(&dir)?;
        eprintln!("Config file: {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    // Logs go to a file; the TUI owns the terminal and headless owns stdout
    nonogram_core::logging::init()?;

    let mut settings = nonogram_viewer::load_settings(args.config.as_deref());
    Overrides {
        api_base: args.api_base,
        catalog_endpoint: args.catalog_endpoint.map(CatalogEndpoint::from),
        cell_size_px: args.cell_size,
    }
    .apply(&mut settings);

    if args.headless {
        let target = args.solve.map(PuzzleId::new);
        let exit = nonogram_viewer::run_headless(settings, target).await?;
        Ok(exit.into())
    } else {
        nonogram_viewer::run_with_settings(settings).await?;
        Ok(ExitCode::SUCCESS)
    }
}
