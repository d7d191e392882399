use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct RouteOutput {
    output: u8,
    input: u8,
}

#[derive(Serialize)]
struct HpdOutput {
    output: u8,
    hpd_high: bool,
}

#[derive(Serialize)]
struct StatusOutput {
    input: u8,
    connected: bool,
}

#[derive(Serialize)]
struct BeepOutput {
    enabled: bool,
}

/// One output port's state in the overview.
#[derive(Serialize)]
pub struct OverviewRow {
    pub output: u8,
    pub input: u8,
    pub hpd_high: bool,
}

pub fn print_route(output: u8, input: u8, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&RouteOutput { output, input }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["OUTPUT", "INPUT"]);
            table.add_row(vec![output.to_string(), input.to_string()]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("output {output} is fed by input {input}"),
    }
}

pub fn print_hpd(output: u8, high: bool, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&HpdOutput {
            output,
            hpd_high: high,
        }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["OUTPUT", "HPD"]);
            table.add_row(vec![output.to_string(), hpd_label(high).to_string()]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("output {output} HPD is {}", hpd_label(high)),
    }
}

pub fn print_status(input: u8, connected: bool, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&StatusOutput { input, connected }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["INPUT", "CABLE"]);
            table.add_row(vec![input.to_string(), cable_label(connected).to_string()]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("input {input} is {}", cable_label(connected)),
    }
}

pub fn print_beep(enabled: bool, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&BeepOutput { enabled }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["BEEP"]);
            table.add_row(vec![if enabled { "enabled" } else { "disabled" }]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("beep is {}", if enabled { "enabled" } else { "disabled" })
        }
    }
}

pub fn print_overview(rows: &[OverviewRow], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => {
            let mut table = new_table(vec!["OUTPUT", "INPUT", "HPD"]);
            for row in rows {
                table.add_row(vec![
                    row.output.to_string(),
                    row.input.to_string(),
                    hpd_label(row.hpd_high).to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in rows {
                println!(
                    "output {} <- input {} (HPD {})",
                    row.output,
                    row.input,
                    hpd_label(row.hpd_high)
                );
            }
        }
    }
}

/// A named EDID emulation profile.
#[derive(Serialize)]
pub struct ProfileRow {
    pub value: u8,
    pub name: &'static str,
}

pub fn print_profiles(rows: &[ProfileRow], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => {
            let mut table = new_table(vec!["VALUE", "PROFILE"]);
            for row in rows {
                table.add_row(vec![row.value.to_string(), row.name.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in rows {
                println!("{:>2}  {}", row.value, row.name);
            }
        }
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn hpd_label(high: bool) -> &'static str {
    if high {
        "high"
    } else {
        "low"
    }
}

fn cable_label(connected: bool) -> &'static str {
    if connected {
        "connected"
    } else {
        "not connected"
    }
}
