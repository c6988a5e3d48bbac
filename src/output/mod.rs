//! Output formatting for network data.
//!
//! This module handles formatting and outputting engine results:
//! - [`csv`] - CSV file export
//! - [`terminal`] - Terminal tables and banner

mod csv;
mod terminal;

pub use csv::{
    escape_csv_field, export_host_list, export_network_info, export_subnets, unique_filename,
    ExportReport, CSV_EXTENSION,
};
pub use terminal::{format_field, print_host_table, print_subnet_table, print_summary, write_banner};
