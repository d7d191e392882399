use crate::cmd::{Connection, SwitchArgs};
use crate::exit::{matrix_error, CliResult, SUCCESS};

pub fn run(args: SwitchArgs, conn: &Connection) -> CliResult<i32> {
    let mut matrix = conn.client()?;
    matrix
        .change_port(args.input, args.output)
        .map_err(|err| matrix_error("switch failed", err))?;
    Ok(SUCCESS)
}
