//! Select a sub-matrix from a JSON matrix document
//!
//! ```text
//! cargo run --features cli --example select_cli -- matrix.json --rows 0,2 --col-range 1:3
//! ```

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use submat::{config, io, parse_index_list, parse_range, SelectionConfig, SubMatrixSelector};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Submat CLI - Select rows and columns from dense, sparse or column matrices")]
struct Cli {
    /// JSON matrix document to select from
    input: std::path::PathBuf,

    /// Row indices (format: 0,2,4:6); overrides range options
    #[arg(long)]
    rows: Option<String>,

    /// Column indices (format: 0,2,4:6); overrides range options
    #[arg(long)]
    cols: Option<String>,

    /// Inclusive row range (format: start:end)
    #[arg(long)]
    row_range: Option<String>,

    /// Inclusive column range (format: start:end)
    #[arg(long)]
    col_range: Option<String>,

    /// JSON file with range options (rowCheckBox, rowStartSpinBox, ...)
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let start_time = std::time::Instant::now();

    let mut options = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => SelectionConfig::new(),
    };
    if let Some(range) = &cli.row_range {
        let (start, end) = parse_range(range)?;
        options = options.with_row_range(start, end);
    }
    if let Some(range) = &cli.col_range {
        let (start, end) = parse_range(range)?;
        options = options.with_col_range(start, end);
    }

    let rows = cli.rows.as_deref().map(parse_index_list).transpose()?;
    let cols = cli.cols.as_deref().map(parse_index_list).transpose()?;

    let input = io::read_matrix::<f64, _>(&cli.input)?;
    let selection =
        SubMatrixSelector::new(options).select(Some(&input), rows.as_ref(), cols.as_ref())?;

    for remark in selection.remarks() {
        eprintln!("note: {remark}");
    }
    io::write_matrix(selection.matrix(), std::io::stdout().lock())?;

    let elapsed = start_time.elapsed();
    eprintln!("Selection completed in {elapsed:.2?}");

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example select_cli");
    std::process::exit(1);
}
