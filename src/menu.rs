//! Interactive menu over a [`Session`].
//!
//! Reads choices from any `BufRead` and writes to any `Write`, so the same
//! loop drives stdin/stdout and tests.

use crate::config::Config;
use crate::models::NetworkBlock;
use crate::output::{
    export_host_list, export_network_info, export_subnets, print_host_table, print_subnet_table,
    print_summary,
};
use crate::session::Session;
use colored::Colorize;
use std::error::Error;
use std::io::{BufRead, Write};

const MENU_OPTIONS: [&str; 8] = [
    "Show network summary",
    "Show host list",
    "Calculate subnets",
    "Export network info",
    "Export host list",
    "Export subnets",
    "Load new network",
    "Exit",
];

const DECLINE_ANSWERS: [&str; 4] = ["n", "no", "quit", "exit"];

pub struct Menu<R, W> {
    input: R,
    output: W,
    session: Session,
    config: Config,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Menu<R, W> {
        Menu {
            input,
            output,
            session: Session::new(),
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Print `text` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, Box<dyn Error>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Load `input` into the session, reporting the outcome.
    pub fn load(&mut self, input: &str) -> Result<NetworkBlock, Box<dyn Error>> {
        let block = self.session.load(input)?;
        log::info!("Loaded {} network {block}", block.family());
        writeln!(
            self.output,
            "{} Network '{block}' loaded successfully",
            block.family()
        )?;
        Ok(block)
    }

    /// Prompt until a network loads.
    ///
    /// Returns `false` if the user declines to retry or input ends.
    pub fn load_network_interactive(&mut self) -> Result<bool, Box<dyn Error>> {
        loop {
            let Some(line) = self.prompt("Enter network (e.g. 192.168.1.0/24 or 2001:db8::/32): ")?
            else {
                return Ok(false);
            };
            match self.load(&line) {
                Ok(_) => return Ok(true),
                Err(e) => {
                    log::info!("Rejected network input '{line}': {e}");
                    writeln!(self.output, "{}", e.to_string().red())?;
                    writeln!(self.output, "Examples:")?;
                    writeln!(self.output, "  IPv4: 192.168.1.0/24, 10.0.0.0/16, 172.16.0.0/12")?;
                    writeln!(self.output, "  IPv6: 2001:db8::/32, fe80::/64, ::1/128")?;
                    let retry = self.prompt("Try again? (y/n): ")?;
                    match retry {
                        Some(answer) if !DECLINE_ANSWERS.contains(&answer.to_lowercase().as_str()) => {}
                        _ => {
                            writeln!(self.output, "Goodbye!")?;
                            return Ok(false);
                        }
                    }
                }
            }
        }
    }

    fn display_menu(&mut self) -> Result<(), Box<dyn Error>> {
        let rule = "=".repeat(40);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "{}", "MASKERADE - NETWORK ANALYZER".bold())?;
        writeln!(self.output, "{rule}")?;
        for (i, option) in MENU_OPTIONS.iter().enumerate() {
            writeln!(self.output, "{}. {option}", i + 1)?;
        }
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    /// Main menu loop. Ends on Exit or end of input.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        loop {
            self.display_menu()?;
            let Some(choice) = self.prompt("Select an option (1-8): ")? else {
                writeln!(self.output, "\nGoodbye!")?;
                return Ok(());
            };
            let result = match choice.as_str() {
                "1" => self.show_summary(),
                "2" => self.show_host_list(),
                "3" => self.calculate_subnets(),
                "4" => self.export_network_info(),
                "5" => self.export_host_list(),
                "6" => self.export_subnets(),
                "7" => match self.load_network_interactive() {
                    Ok(false) => return Ok(()),
                    other => other.map(|_| ()),
                },
                "8" => {
                    writeln!(self.output, "Thank you for using Maskerade!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid option. Please select 1-8.")?;
                    Ok(())
                }
            };
            if let Err(e) = result {
                log::info!("Menu option {choice} failed: {e}");
                writeln!(self.output, "{}", format!("An error occurred: {e}").red())?;
            }
        }
    }

    pub fn show_summary(&mut self) -> Result<(), Box<dyn Error>> {
        let info = self.session.describe()?;
        print_summary(&mut self.output, &info)?;
        Ok(())
    }

    /// Read a host limit; blank means the configured default.
    fn read_limit(&mut self, text: &str) -> Result<Option<u128>, Box<dyn Error>> {
        let prompt = format!("{text} (press Enter for default {}): ", self.config.max_hosts);
        match self.prompt(&prompt)? {
            None => Ok(None),
            Some(line) if line.is_empty() => Ok(Some(self.config.max_hosts)),
            Some(line) => {
                let limit = line
                    .parse::<u128>()
                    .map_err(|_| format!("invalid host count '{line}'"))?;
                Ok(Some(limit))
            }
        }
    }

    fn read_prefix(&mut self, text: &str) -> Result<Option<u8>, Box<dyn Error>> {
        let current = self.session.network()?.prefix();
        match self.prompt(&format!("{text} (current: /{current}): "))? {
            None => Ok(None),
            Some(line) => {
                let prefix = line
                    .trim_start_matches('/')
                    .parse::<u8>()
                    .map_err(|_| format!("invalid prefix '{line}'"))?;
                Ok(Some(prefix))
            }
        }
    }

    fn show_host_list(&mut self) -> Result<(), Box<dyn Error>> {
        self.session.network()?;
        let Some(limit) = self.read_limit("Number of hosts to show")? else {
            return Ok(());
        };
        let listing = self.session.hosts(Some(limit))?;
        print_host_table(&mut self.output, listing)?;
        Ok(())
    }

    fn calculate_subnets(&mut self) -> Result<(), Box<dyn Error>> {
        let Some(new_prefix) = self.read_prefix("Enter new subnet prefix")? else {
            return Ok(());
        };
        let subnets = self.session.subdivide(new_prefix)?;
        print_subnet_table(&mut self.output, subnets, self.config.max_subnets)?;
        Ok(())
    }

    fn export_network_info(&mut self) -> Result<(), Box<dyn Error>> {
        let info = self.session.describe()?;
        let path = export_network_info(&info, &self.config.export_dir, "network_info")
            .map_err(|e| format!("Export failed: {e}"))?;
        writeln!(self.output, "Network info exported to {}", path.display())?;
        Ok(())
    }

    fn export_host_list(&mut self) -> Result<(), Box<dyn Error>> {
        self.session.network()?;
        let Some(limit) = self.read_limit("Number of hosts to export")? else {
            return Ok(());
        };
        let listing = self.session.hosts(Some(limit))?;
        let report = export_host_list(listing, &self.config.export_dir, "host_list")
            .map_err(|e| format!("Export failed: {e}"))?;
        writeln!(
            self.output,
            "Host list exported to {} ({} of {} hosts)",
            report.path.display(),
            report.rows,
            report.total
        )?;
        Ok(())
    }

    fn export_subnets(&mut self) -> Result<(), Box<dyn Error>> {
        let Some(new_prefix) = self.read_prefix("Enter subnet prefix for export")? else {
            return Ok(());
        };
        let subnets = self.session.subdivide(new_prefix)?;
        let report = export_subnets(
            subnets,
            self.config.max_subnets,
            &self.config.export_dir,
            "subnets",
        )
        .map_err(|e| format!("Export failed: {e}"))?;
        writeln!(
            self.output,
            "Subnets exported to {} ({} of {} subnets)",
            report.path.display(),
            report.rows,
            report.total
        )?;
        Ok(())
    }
}
