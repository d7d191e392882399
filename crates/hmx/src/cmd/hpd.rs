use crate::cmd::{Connection, HpdArgs};
use crate::exit::{matrix_error, CliResult, SUCCESS};
use crate::output::{print_hpd, OutputFormat};

pub fn run(args: HpdArgs, conn: &Connection, format: OutputFormat) -> CliResult<i32> {
    let mut matrix = conn.client()?;
    let high = matrix
        .query_hdp(args.output)
        .map_err(|err| matrix_error("hpd query failed", err))?;
    print_hpd(args.output, high, format);
    Ok(SUCCESS)
}
