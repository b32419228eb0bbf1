//! CLI command for transaction export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_transactions, ExportFormat};
use crate::storage::Storage;

use super::FilterArgs;

/// Arguments of `findash export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format: csv, json or text
    pub format: String,

    /// Output file ("-" for stdout); defaults to transactions_<date>.<ext>
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> FinanceResult<()> {
    let format = ExportFormat::parse(&args.format)?;
    let filter = args.filter.to_filter()?;

    let output = args.output.unwrap_or_else(|| {
        PathBuf::from(format.default_file_name(chrono::Local::now().date_naive()))
    });

    if output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        export_transactions(storage, format, &filter, &mut writer)?;
        writer.flush()?;
        return Ok(());
    }

    let file = File::create(&output).map_err(|e| {
        FinanceError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    let count = export_transactions(storage, format, &filter, &mut writer)?;
    writer.flush()?;

    println!("Exported {} transactions to: {}", count, output.display());
    Ok(())
}
