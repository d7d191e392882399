mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::{Command, Connection};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "hmx", version, about = "HDMI matrix switch control over RS-232")]
struct Cli {
    /// Serial device connected to the matrix.
    #[arg(
        long,
        short = 'd',
        value_name = "PATH",
        env = "HMX_DEVICE",
        default_value = "/dev/ttyUSB0",
        global = true
    )]
    device: String,

    /// Serial baud rate.
    #[arg(long, value_name = "BAUD", default_value_t = 19_200, global = true)]
    baud: u32,

    /// Serial read/write timeout (e.g. 5s, 500ms).
    #[arg(long, value_name = "DURATION", default_value = "10s", global = true)]
    timeout: String,

    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = cmd::parse_duration(&cli.timeout).and_then(|timeout| {
        let conn = Connection {
            device: cli.device,
            baud_rate: cli.baud,
            timeout,
        };
        let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
        cmd::run(cli.command, &conn, format)
    });

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_switch_subcommand() {
        let cli = Cli::try_parse_from(["hmx", "switch", "1", "2"]).expect("switch should parse");
        assert!(matches!(cli.command, Command::Switch(_)));
        assert_eq!(cli.device, "/dev/ttyUSB0");
        assert_eq!(cli.baud, 19_200);
    }

    #[test]
    fn parses_global_device_after_subcommand() {
        let cli = Cli::try_parse_from(["hmx", "route", "3", "--device", "/dev/ttyUSB1"])
            .expect("route args should parse");
        assert_eq!(cli.device, "/dev/ttyUSB1");
        assert!(matches!(cli.command, Command::Route(_)));
    }

    #[test]
    fn parses_edid_set_subcommand() {
        let cli = Cli::try_parse_from(["hmx", "edid", "set", "2", "14"])
            .expect("edid set should parse");
        assert!(matches!(cli.command, Command::Edid(_)));
    }

    #[test]
    fn parses_beep_and_overview() {
        let cli = Cli::try_parse_from(["hmx", "beep", "on"]).expect("beep on should parse");
        assert!(matches!(cli.command, Command::Beep(_)));

        let cli = Cli::try_parse_from(["hmx", "overview"]).expect("overview should parse");
        assert!(matches!(cli.command, Command::Overview(_)));
    }

    #[test]
    fn rejects_non_numeric_ports() {
        assert!(Cli::try_parse_from(["hmx", "switch", "one", "2"]).is_err());
    }
}
