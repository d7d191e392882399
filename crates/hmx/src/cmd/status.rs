use crate::cmd::{Connection, StatusArgs};
use crate::exit::{matrix_error, CliResult, SUCCESS};
use crate::output::{print_status, OutputFormat};

pub fn run(args: StatusArgs, conn: &Connection, format: OutputFormat) -> CliResult<i32> {
    let mut matrix = conn.client()?;
    let connected = matrix
        .query_status(args.input)
        .map_err(|err| matrix_error("status query failed", err))?;
    print_status(args.input, connected, format);
    Ok(SUCCESS)
}
