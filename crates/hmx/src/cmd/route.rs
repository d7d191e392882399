use crate::cmd::{Connection, RouteArgs};
use crate::exit::{matrix_error, CliResult, SUCCESS};
use crate::output::{print_route, OutputFormat};

pub fn run(args: RouteArgs, conn: &Connection, format: OutputFormat) -> CliResult<i32> {
    let mut matrix = conn.client()?;
    let input = matrix
        .query_port(args.output)
        .map_err(|err| matrix_error("route query failed", err))?;
    print_route(args.output, input, format);
    Ok(SUCCESS)
}
