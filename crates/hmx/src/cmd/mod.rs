use std::time::Duration;

use clap::{Args, Subcommand};
use hmx_client::MatrixClient;
use hmx_transport::{open_serial, SerialConfig, SerialTransport};

use crate::exit::{transport_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod beep;
pub mod edid;
pub mod hpd;
pub mod overview;
pub mod route;
pub mod status;
pub mod switch;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Route an input to an output.
    Switch(SwitchArgs),
    /// Show which input feeds an output.
    Route(RouteArgs),
    /// Manage EDID emulation profiles.
    Edid(EdidArgs),
    /// Show hot-plug detect state for an output.
    Hpd(HpdArgs),
    /// Show cable status for an input.
    Status(StatusArgs),
    /// Control the confirmation beep.
    Beep(BeepArgs),
    /// Show routing and HPD for every output.
    Overview(OverviewArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, conn: &Connection, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Switch(args) => switch::run(args, conn),
        Command::Route(args) => route::run(args, conn, format),
        Command::Edid(args) => edid::run(args, conn, format),
        Command::Hpd(args) => hpd::run(args, conn, format),
        Command::Status(args) => status::run(args, conn, format),
        Command::Beep(args) => beep::run(args, conn, format),
        Command::Overview(args) => overview::run(args, conn, format),
        Command::Version(args) => version::run(args),
    }
}

/// Serial connection parameters shared by every device command.
#[derive(Debug)]
pub struct Connection {
    pub device: String,
    pub baud_rate: u32,
    pub timeout: Duration,
}

impl Connection {
    /// Open the serial link and wrap it in a matrix client.
    pub fn client(&self) -> CliResult<MatrixClient<SerialTransport>> {
        let config = SerialConfig {
            baud_rate: self.baud_rate,
            timeout: self.timeout,
        };
        let port = open_serial(&self.device, &config)
            .map_err(|err| transport_error("failed to open device", err))?;
        Ok(MatrixClient::new(port))
    }
}

#[derive(Args, Debug)]
pub struct SwitchArgs {
    /// Input port (1-4).
    pub input: u8,
    /// Output port (1-4).
    pub output: u8,
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Output port (1-4).
    pub output: u8,
}

#[derive(Args, Debug)]
pub struct EdidArgs {
    #[command(subcommand)]
    pub command: EdidCommand,
}

#[derive(Subcommand, Debug)]
pub enum EdidCommand {
    /// Set an input's EDID profile.
    Set {
        /// Input port (1-4).
        input: u8,
        /// EDID profile value (1-15, see `edid profiles`).
        value: u8,
    },
    /// Set every input's EDID profile.
    SetAll {
        /// EDID profile value (1-15, see `edid profiles`).
        value: u8,
    },
    /// Copy the display's EDID from an output to an input.
    Copy {
        /// Output port to copy from (1-4).
        output: u8,
        /// Input port to copy to (1-4).
        input: u8,
    },
    /// Copy the display's EDID from an output to every input.
    CopyAll {
        /// Output port to copy from (1-4).
        output: u8,
    },
    /// List the predefined EDID profiles.
    Profiles,
}

#[derive(Args, Debug)]
pub struct HpdArgs {
    /// Output port (1-4).
    pub output: u8,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Input port (1-4).
    pub input: u8,
}

#[derive(Args, Debug)]
pub struct BeepArgs {
    #[command(subcommand)]
    pub command: BeepCommand,
}

#[derive(Subcommand, Debug)]
pub enum BeepCommand {
    /// Enable the confirmation beep.
    On,
    /// Disable the confirmation beep.
    Off,
    /// Show whether the beep is enabled.
    Query,
}

#[derive(Args, Debug, Default)]
pub struct OverviewArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build information.
    #[arg(long)]
    pub extended: bool,
}

pub fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        _ => Err(CliError::new(
            USAGE,
            format!("unsupported duration unit: {unit}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_seconds_and_millis() {
        assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration("150ms").unwrap(), Duration::from_millis(150));
        assert_eq!(parse_duration("10").unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn parse_duration_rejects_invalid_values() {
        assert!(parse_duration("0s").is_err());
        assert!(parse_duration("").is_err());
        assert!(parse_duration("fast").is_err());
    }
}
