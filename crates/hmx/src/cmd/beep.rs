use crate::cmd::{BeepArgs, BeepCommand, Connection};
use crate::exit::{matrix_error, CliResult, SUCCESS};
use crate::output::{print_beep, OutputFormat};

pub fn run(args: BeepArgs, conn: &Connection, format: OutputFormat) -> CliResult<i32> {
    let mut matrix = conn.client()?;
    match args.command {
        BeepCommand::On => matrix
            .set_beep(true)
            .map_err(|err| matrix_error("beep on failed", err))?,
        BeepCommand::Off => matrix
            .set_beep(false)
            .map_err(|err| matrix_error("beep off failed", err))?,
        BeepCommand::Query => {
            let enabled = matrix
                .query_beep()
                .map_err(|err| matrix_error("beep query failed", err))?;
            print_beep(enabled, format);
        }
    }
    Ok(SUCCESS)
}
