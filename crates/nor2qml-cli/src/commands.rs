use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span, warn};

use nor2qml_map::{IdSequence, codes};
use nor2qml_model::{AmplitudeConversion, ConversionOptions, OutputMode};
use nor2qml_schema::{SchemaGate, XsdSchema};

use crate::cli::ConvertArgs;
use crate::pipeline::{
    FileNames, check_schema, default_schema_path, ingest, map_event, output_file_name, parse,
    summarize, validate, write_document, write_report,
};
use crate::summary::apply_table_style;
use crate::types::{ConversionResult, EventStatus, EventSummary, PipelineError};

/// Print the code tables used by the mapper.
pub fn run_codes() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Table", "Nordic", "QuakeML"]);
    apply_table_style(&mut table);
    for code in ['*', 'Q', 'E', 'P', 'I', 'V', 'X', 'A'] {
        table.add_row(vec![
            "event type".to_string(),
            code.to_string(),
            codes::event_type(Some(code)).to_string(),
        ]);
    }
    for code in ['L', 'C', 'B', 'S', 'W'] {
        if let Some(kind) = codes::magnitude_type(code) {
            table.add_row(vec!["magnitude type".to_string(), code.to_string(), kind.to_string()]);
        }
    }
    for code in ['C', 'D', '+', '-'] {
        if let Some(polarity) = codes::polarity(code) {
            table.add_row(vec!["polarity".to_string(), code.to_string(), polarity.to_string()]);
        }
    }
    for code in ['S', 'B', 'L'] {
        if let Some(prefix) = codes::channel_prefix(code) {
            table.add_row(vec!["instrument".to_string(), code.to_string(), prefix.to_string()]);
        }
    }
    println!("{table}");
    Ok(())
}

pub fn conversion_options(args: &ConvertArgs) -> ConversionOptions {
    ConversionOptions::default()
        .with_mode(if args.short {
            OutputMode::Short
        } else {
            OutputMode::Long
        })
        .with_authority_id(args.authority.as_str())
        .with_network_code(args.network_code.as_str())
        .with_amplitude_conversion(if args.legacy_amplitude {
            AmplitudeConversion::LegacyPower
        } else {
            AmplitudeConversion::Scale
        })
}

/// Accepted document waiting for the write stage.
struct PendingDocument {
    summary_index: usize,
    file_name: String,
    text: String,
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConversionResult> {
    let input = &args.input;
    let run_span = info_span!("convert", input = %input.display());
    let _run_guard = run_span.enter();
    let output_dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let options = conversion_options(args);

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_start = Instant::now();
    let blocks = ingest(input).context("read Nordic file")?;
    let selected = if args.all_events { blocks.len() } else { 1 };
    info!(
        events = blocks.len(),
        selected,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );
    if blocks.len() > selected {
        warn!(
            skipped = blocks.len() - selected,
            "only the first event is converted; use --all-events for the rest"
        );
    }

    // =========================================================================
    // Setup: Load the schema once per run
    // =========================================================================
    let schema_path = match &args.schema {
        Some(path) => path.clone(),
        None => default_schema_path()?,
    };
    let schema = XsdSchema::load(&schema_path)
        .with_context(|| format!("load schema {}", schema_path.display()))?;
    let gate = SchemaGate::new(schema);

    // =========================================================================
    // Stage 2-4: Validate, Map, Schema - one event at a time
    // =========================================================================
    let mut sequence = IdSequence::new();
    let mut summaries: Vec<EventSummary> = Vec::new();
    let mut pending: Vec<PendingDocument> = Vec::new();
    let mut file_names = FileNames::default();

    for (offset, block) in blocks.iter().take(selected).enumerate() {
        let index = offset + 1;
        let _event_guard = info_span!("event", index).entered();

        let parsed = match parse(block) {
            Ok(parsed) => parsed,
            Err(err) => {
                summaries.push(EventSummary {
                    index,
                    first_line: block.first_line,
                    origin_time: None,
                    event_type: None,
                    headers: 0,
                    phases: 0,
                    status: EventStatus::Malformed,
                    output: None,
                    error: Some(err.to_string()),
                    discrepancies: Vec::new(),
                });
                continue;
            }
        };

        let mut summary = summarize(index, block, &parsed.event);
        let checked = validate(parsed);
        summary.discrepancies = checked.report.discrepancies.clone();
        if let Err(err) = checked.ensure_valid() {
            debug!(error = %err, "event not mapped");
            summary.status = EventStatus::Invalid;
            summaries.push(summary);
            continue;
        }

        let root = map_event(&checked.event, &options, &mut sequence)
            .with_context(|| format!("map event {index}"))?;
        // Schema failures end the run before anything is written.
        let text = check_schema(&gate, &root).map_err(|err| match err {
            PipelineError::Schema(schema_err) => anyhow::Error::new(schema_err)
                .context(format!("event {index} is not valid QuakeML")),
            other => anyhow::Error::new(other),
        })?;

        let file_name = checked
            .event
            .first_main()
            .and_then(output_file_name)
            .with_context(|| format!("event {index} has no origin time"))?;
        let file_name = file_names.claim(file_name);
        pending.push(PendingDocument {
            summary_index: summaries.len(),
            file_name,
            text,
        });
        summaries.push(summary);
    }

    // =========================================================================
    // Stage 5: Write
    // =========================================================================
    for document in pending {
        let summary = &mut summaries[document.summary_index];
        if args.dry_run {
            info!(file = %document.file_name, "dry run, document not written");
            continue;
        }
        let path = write_document(&output_dir, &document.file_name, &document.text)?;
        summary.output = Some(path);
        summary.status = EventStatus::Converted;
    }

    let has_errors = summaries.iter().any(|summary| summary.status.is_failure());
    let result = ConversionResult {
        input: input.clone(),
        output_dir,
        schema: schema_path,
        events: summaries,
        report: args.report.clone(),
        has_errors,
    };
    if let Some(path) = &args.report {
        write_report(path, &result)?;
    }
    info!(
        events = result.events.len(),
        failed = result.events.iter().filter(|e| e.status.is_failure()).count(),
        last_id = sequence.current(),
        "conversion complete"
    );
    Ok(result)
}
