//! CSV export of network data.
//!
//! Every export picks a fresh file name (`prefix_1.csv`, `prefix_2.csv`, ...)
//! so earlier exports are never overwritten.

use crate::models::HOST_FIELDS;
use crate::processing::{HostListing, NetworkInfo, SubnetSummary, Subnets, INFO_FIELDS, SUBNET_FIELDS};
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const CSV_EXTENSION: &str = "csv";

/// Result of a host or subnet export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// File written.
    pub path: PathBuf,
    /// Data rows written, excluding the header.
    pub rows: u128,
    /// Rows available before the cap was applied.
    pub total: String,
}

/// Find the first `prefix_N.extension` in `dir` that does not exist yet, starting at 1.
pub fn unique_filename(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    let mut i: u64 = 1;
    loop {
        let candidate = dir.join(format!("{prefix}_{i}.{extension}"));
        if !candidate.exists() {
            return candidate;
        }
        i += 1;
    }
}

/// Quote a field if it contains a comma, quote or line break.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') || input.contains('\n') {
        // enclose in double quotes and escape any double quotes within the field.
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

fn write_row<W: Write, T: AsRef<str>>(out: &mut W, fields: &[T]) -> std::io::Result<()> {
    let line = fields
        .iter()
        .map(|f| escape_csv_field(f.as_ref()))
        .collect::<Vec<String>>()
        .join(",");
    writeln!(out, "{line}")
}

/// Write `rows` under `header`, with a leading 1-based `#` index column.
fn write_indexed<I>(path: &Path, header: &[&str], rows: I) -> Result<u128, Box<dyn Error>>
where
    I: Iterator<Item = Vec<String>>,
{
    let file = File::create(path)
        .map_err(|e| format!("Error creating export file {}: {e}", path.display()))?;
    let mut out = BufWriter::new(file);

    let mut full_header = vec!["#"];
    full_header.extend_from_slice(header);
    write_row(&mut out, &full_header)?;

    let mut count: u128 = 0;
    for values in rows {
        count += 1;
        let mut line = vec![count.to_string()];
        line.extend(values);
        write_row(&mut out, &line)?;
    }
    out.flush()
        .map_err(|e| format!("Error writing export file {}: {e}", path.display()))?;
    Ok(count)
}

/// Export the network summary as a single-row CSV.
pub fn export_network_info(
    info: &NetworkInfo,
    dir: &Path,
    prefix: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = unique_filename(dir, prefix, CSV_EXTENSION);
    let file = File::create(&path)
        .map_err(|e| format!("Error creating export file {}: {e}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_row(&mut out, &INFO_FIELDS)?;
    write_row(&mut out, &info.values())?;
    out.flush()?;
    log::info!("Exported network info for {} to {}", info.network_cidr, path.display());
    Ok(path)
}

/// Export a host listing, one row per host.
pub fn export_host_list(
    listing: HostListing,
    dir: &Path,
    prefix: &str,
) -> Result<ExportReport, Box<dyn Error>> {
    let path = unique_filename(dir, prefix, CSV_EXTENSION);
    let total = listing.total().to_string();
    let rows = write_indexed(&path, &HOST_FIELDS, listing.map(|h| h.values()))?;
    log::info!("Exported {rows} of {total} hosts to {}", path.display());
    Ok(ExportReport { path, rows, total })
}

/// Export at most `limit` subnets, one row per subnet.
pub fn export_subnets(
    subnets: Subnets,
    limit: u128,
    dir: &Path,
    prefix: &str,
) -> Result<ExportReport, Box<dyn Error>> {
    let path = unique_filename(dir, prefix, CSV_EXTENSION);
    let total = subnets.total().to_string();
    let capped = subnets
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .map(|s| SubnetSummary::from(&s).values());
    let rows = write_indexed(&path, &SUBNET_FIELDS, capped)?;
    log::info!("Exported {rows} of {total} subnets to {}", path.display());
    Ok(ExportReport { path, rows, total })
}
