//! Generator pipeline: input -> filter -> encode -> assemble -> write

use anyhow::{Context, Result};
use credits_data::{assemble, chunk_label, dummy_entries, write_asm, ChunkSequence, ExcludeList};
use std::path::Path;

use crate::config::{GenerateArgs, InputSource};
use crate::input::load_entries;

/// Run the generator, returning the number of chunks written.
///
/// The whole table is rendered in memory first, so an encoding error leaves
/// the output file untouched.
pub fn run(args: &GenerateArgs) -> Result<usize> {
    let source = args.input_source()?;

    let exclude = ExcludeList::parse(&args.exclude);
    if !exclude.is_empty() {
        tracing::debug!("Excluding {} names", exclude.len());
    }

    let entries = match &source {
        InputSource::Csv(path) => {
            let loaded = load_entries(path, &exclude)?;
            for skipped in &loaded.skipped {
                tracing::warn!(
                    "Error parsing subscriber on line {}: {}",
                    skipped.line,
                    skipped.error
                );
            }
            tracing::debug!(
                "Read {} subscribers from {} ({} skipped, {} excluded)",
                loaded.entries.len(),
                path.display(),
                loaded.skipped.len(),
                loaded.excluded
            );
            loaded.entries
        }
        InputSource::Dummy => {
            tracing::debug!("Using dummy names");
            dummy_entries()
        }
    };

    let sequence = assemble(entries, &exclude).context("Failed to encode credits")?;
    log_chunks(&sequence);

    let mut text = Vec::new();
    write_asm(&mut text, &sequence).context("Failed to render credits")?;
    write_output(&args.output, &text)?;

    tracing::info!(
        "Chunks in credits: {} ({} bytes of chunk data) -> {}",
        sequence.len(),
        sequence.encoded_len(),
        args.output.display()
    );

    Ok(sequence.len())
}

fn log_chunks(sequence: &ChunkSequence) {
    for (i, chunk) in sequence.chunks().iter().enumerate() {
        tracing::debug!(
            "  {} {} (attribute ${:02X})",
            chunk_label(i),
            chunk.label().unwrap_or("unlabeled"),
            chunk.packed_attribute()
        );
    }
}

fn write_output(path: &Path, text: &[u8]) -> Result<()> {
    std::fs::write(path, text)
        .with_context(|| format!("Unable to create {}", path.display()))?;
    Ok(())
}
