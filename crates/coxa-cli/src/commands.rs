//! Command implementations.

use anyhow::{Context, Result};
use tracing::{debug, info_span, trace, warn};

use coxa_cli::logging::redact_value;
use coxa_cli::record_file::load_record;
use coxa_clipboard::{CopyOutcome, SystemClipboard};
use coxa_export::{ExportPayload, display_cell, serialize};
use coxa_model::{MeasurementRecord, Side};

use crate::cli::{EmitArg, ReportArgs};
use crate::summary::{print_parameters, print_report};

/// Result of the report command.
#[derive(Debug)]
pub struct ReportOutcome {
    /// Clipboard outcome when `--copy` was requested.
    pub copied: Option<CopyOutcome>,
}

pub fn run_report(args: &ReportArgs) -> Result<ReportOutcome> {
    let span = info_span!("report", record = %args.record.display());
    let _guard = span.enter();

    let record = load_record(&args.record)?;
    debug!(filled = record.filled_slots(), "record loaded");
    trace_slots(&record);

    print_report(&record);

    let payload = serialize(&record).context("serialize record")?;
    if let Some(emit) = args.emit {
        match emit {
            EmitArg::Html => println!("{}", payload.markup),
            // The plain rendering already ends in a newline.
            EmitArg::Plain => print!("{}", payload.plain),
        }
    }

    let copied = if args.copy {
        Some(copy_payload(&payload))
    } else {
        None
    };
    Ok(ReportOutcome { copied })
}

pub fn run_parameters() -> Result<()> {
    print_parameters();
    Ok(())
}

pub fn run_template() -> Result<()> {
    let record = MeasurementRecord::new();
    let json = serde_json::to_string_pretty(&record).context("serialize record template")?;
    println!("{json}");
    Ok(())
}

fn copy_payload(payload: &ExportPayload) -> CopyOutcome {
    match SystemClipboard::new() {
        Ok(mut clipboard) => clipboard.copy(payload),
        Err(error) => {
            warn!(%error, "system clipboard unavailable");
            CopyOutcome::Failed
        }
    }
}

/// Trace-logs filled slots. Values are redacted unless `--log-data` was
/// passed; measurements are patient data.
fn trace_slots(record: &MeasurementRecord) {
    for (parameter, sides) in record.iter() {
        for &side in &Side::ALL {
            let value = sides.get(side);
            if value.is_set() {
                trace!(
                    parameter = %parameter,
                    side = %side,
                    value = %redact_value(&display_cell(parameter, value)),
                    "slot"
                );
            }
        }
    }
}
