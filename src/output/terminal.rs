//! Terminal output utilities.
//!
//! Renders summaries and row tables for the interactive menu.

use crate::models::{AddressFamily, HOST_FIELDS};
use crate::processing::{HostListing, NetworkInfo, SubnetSummary, Subnets, SUBNET_FIELDS};
use colored::Colorize;
use std::io::{self, Write};

const BANNER: &str = r#"
 __  __           _                       _
|  \/  | __ _ ___| | _____ _ __ __ _  __| | ___
| |\/| |/ _` / __| |/ / _ \ '__/ _` |/ _` |/ _ \
| |  | | (_| \__ \   <  __/ | | (_| | (_| |  __/
|_|  |_|\__,_|___/_|\_\___|_|  \__,_|\__,_|\___|
"#;

/// Format a value as a left-aligned, space-padded field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}

fn write_row<W: Write, T: ToString>(out: &mut W, values: &[T], widths: &[usize]) -> io::Result<()> {
    let line = values
        .iter()
        .zip(widths)
        .map(|(v, w)| format_field(v.to_string(), *w))
        .collect::<Vec<String>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

/// Print the tool banner and tagline.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER.cyan())?;
    writeln!(out, "A network analyzer tool for IPv4 and IPv6\n")
}

/// Print the labelled network summary.
pub fn print_summary<W: Write>(out: &mut W, info: &NetworkInfo) -> io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "{}", "NETWORK SUMMARY".bold())?;
    writeln!(out, "{rule}")?;
    for (key, value) in info.rows() {
        writeln!(out, "{key:<20}: {value}")?;
    }
    writeln!(out, "{rule}")
}

/// Print a host table. Returns the number of rows printed.
pub fn print_host_table<W: Write>(out: &mut W, listing: HostListing) -> io::Result<u128> {
    if listing.total() == 0 {
        writeln!(out, "\nNo usable hosts in this network")?;
        return Ok(0);
    }
    let total = listing.total();
    let omitted = listing.omitted();
    let truncated = listing.is_truncated();
    let widths = match listing.family() {
        AddressFamily::V6 => [6, 39, 34, 135],
        AddressFamily::V4 => [6, 15, 10, 35],
    };
    writeln!(out)?;
    let mut header = vec!["#"];
    header.extend_from_slice(&HOST_FIELDS);
    write_row(out, &header, &widths)?;

    let mut count: u128 = 0;
    for host in listing {
        count += 1;
        let mut values = vec![count.to_string()];
        values.extend(host.values());
        write_row(out, &values, &widths)?;
    }
    if truncated {
        writeln!(
            out,
            "{}",
            format!("Showing first {count} of {total} hosts ({omitted} omitted)").yellow()
        )?;
    }
    Ok(count)
}

/// Print at most `limit` subnets. Returns the number of rows printed.
pub fn print_subnet_table<W: Write>(out: &mut W, subnets: Subnets, limit: u128) -> io::Result<u128> {
    let total = subnets.total();
    let widths = [6, 18, 12, 15, 15, 15, 17, 15, 21];
    writeln!(out)?;
    let mut header = vec!["#"];
    header.extend_from_slice(&SUBNET_FIELDS);
    write_row(out, &header, &widths)?;

    let mut count: u128 = 0;
    for subnet in subnets.take(usize::try_from(limit).unwrap_or(usize::MAX)) {
        count += 1;
        let mut values = vec![count.to_string()];
        values.extend(SubnetSummary::from(&subnet).values());
        write_row(out, &values, &widths)?;
    }
    if total.exceeds(count) {
        writeln!(
            out,
            "{}",
            format!("Showing first {count} of {total} subnets").yellow()
        )?;
    }
    Ok(count)
}
