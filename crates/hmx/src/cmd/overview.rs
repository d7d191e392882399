use hmx_proto::{PORT_MAX, PORT_MIN};

use crate::cmd::{Connection, OverviewArgs};
use crate::exit::{matrix_error, CliResult, SUCCESS};
use crate::output::{print_overview, OutputFormat, OverviewRow};

/// Query routing and hot-plug state for every output, one transaction
/// at a time (the protocol allows no pipelining).
pub fn run(_args: OverviewArgs, conn: &Connection, format: OutputFormat) -> CliResult<i32> {
    let mut matrix = conn.client()?;

    let mut rows = Vec::with_capacity(usize::from(PORT_MAX));
    for output in PORT_MIN..=PORT_MAX {
        let input = matrix
            .query_port(output)
            .map_err(|err| matrix_error("route query failed", err))?;
        let hpd_high = matrix
            .query_hdp(output)
            .map_err(|err| matrix_error("hpd query failed", err))?;
        rows.push(OverviewRow {
            output,
            input,
            hpd_high,
        });
    }

    print_overview(&rows, format);
    Ok(SUCCESS)
}
