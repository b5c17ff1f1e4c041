//! Diagnostic: decode a DXF file, list its records and notifications,
//! optionally re-encode it for another revision.
//!
//! ```text
//! dxf_dump <input.dxf> [AC1009|AC1012|AC1014|AC1015 <output.dxf>]
//! ```
//!
//! Log output is controlled by `RUST_LOG` (default `info`).

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use dxf_codec::{DxfReader, DxfVersion, DxfWriter};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        bail!("usage: dxf_dump <input.dxf> [VERSION <output.dxf>]");
    };

    let reader = DxfReader::from_file(&input).with_context(|| format!("opening {}", input.display()))?;
    let (records, report) = reader
        .read_records()
        .with_context(|| format!("decoding {}", input.display()))?;

    info!(
        path = %input.display(),
        outcome = ?report.outcome,
        version = ?report.version,
        records = records.entries.len(),
        "decoded"
    );

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records.records() {
        *counts.entry(record.type_name()).or_default() += 1;
    }
    println!("header variables: {}", records.header.len());
    for (name, count) in &counts {
        println!("  {name:<12} {count}");
    }
    if !report.notifications.is_empty() {
        println!("\nnotifications ({}):", report.notifications.len());
        for note in report.notifications.iter() {
            println!("  {note}");
        }
    }

    if let Some(version) = args.next() {
        let target = DxfVersion::from_version_string(&version)
            .with_context(|| format!("unknown target revision {version}"))?;
        let output = args
            .next()
            .map(PathBuf::from)
            .context("missing output path after target revision")?;
        let notifications = DxfWriter::from_records(records, target)
            .write_to_file(&output)
            .with_context(|| format!("writing {}", output.display()))?;
        info!(path = %output.display(), version = %target, "encoded");
        for note in notifications.iter() {
            println!("  {note}");
        }
    }

    Ok(())
}
