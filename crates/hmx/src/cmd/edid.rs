use hmx_proto::catalog;

use crate::cmd::{Connection, EdidArgs, EdidCommand};
use crate::exit::{matrix_error, CliResult, SUCCESS};
use crate::output::{print_profiles, OutputFormat, ProfileRow};

pub fn run(args: EdidArgs, conn: &Connection, format: OutputFormat) -> CliResult<i32> {
    // Listing profiles needs no device.
    if matches!(args.command, EdidCommand::Profiles) {
        print_profiles(&profiles(), format);
        return Ok(SUCCESS);
    }

    let mut matrix = conn.client()?;
    match args.command {
        EdidCommand::Set { input, value } => matrix
            .set_edid(input, value)
            .map_err(|err| matrix_error("edid set failed", err))?,
        EdidCommand::SetAll { value } => matrix
            .set_edid_to_all(value)
            .map_err(|err| matrix_error("edid set-all failed", err))?,
        EdidCommand::Copy { output, input } => matrix
            .copy_edid(output, input)
            .map_err(|err| matrix_error("edid copy failed", err))?,
        EdidCommand::CopyAll { output } => matrix
            .copy_edid_to_all(output)
            .map_err(|err| matrix_error("edid copy-all failed", err))?,
        EdidCommand::Profiles => unreachable!("handled above"),
    }
    Ok(SUCCESS)
}

fn profiles() -> Vec<ProfileRow> {
    vec![
        ProfileRow {
            value: catalog::EDID_1080I_20,
            name: "1080i, 2.0 audio",
        },
        ProfileRow {
            value: catalog::EDID_1080I_51,
            name: "1080i, 5.1 audio",
        },
        ProfileRow {
            value: catalog::EDID_1080I_71,
            name: "1080i, 7.1 audio",
        },
        ProfileRow {
            value: catalog::EDID_1080P_20,
            name: "1080p, 2.0 audio",
        },
        ProfileRow {
            value: catalog::EDID_1080P_51,
            name: "1080p, 5.1 audio",
        },
        ProfileRow {
            value: catalog::EDID_1080P_71,
            name: "1080p, 7.1 audio",
        },
        ProfileRow {
            value: catalog::EDID_3D_20,
            name: "3D, 2.0 audio",
        },
        ProfileRow {
            value: catalog::EDID_3D_51,
            name: "3D, 5.1 audio",
        },
        ProfileRow {
            value: catalog::EDID_3D_71,
            name: "3D, 7.1 audio",
        },
        ProfileRow {
            value: catalog::EDID_4K2K_20,
            name: "4K2K, 2.0 audio",
        },
        ProfileRow {
            value: catalog::EDID_4K2K_51,
            name: "4K2K, 5.1 audio",
        },
        ProfileRow {
            value: catalog::EDID_4K2K_71,
            name: "4K2K, 7.1 audio",
        },
        ProfileRow {
            value: catalog::EDID_DVI_1024_768,
            name: "DVI 1024x768",
        },
        ProfileRow {
            value: catalog::EDID_DVI_1920_1080,
            name: "DVI 1920x1080",
        },
        ProfileRow {
            value: catalog::EDID_DVI_1920_1200,
            name: "DVI 1920x1200",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_list_covers_full_edid_range() {
        let rows = profiles();
        assert_eq!(rows.len(), usize::from(catalog::EDID_MAX));
        assert_eq!(rows.first().unwrap().value, catalog::EDID_MIN);
        assert_eq!(rows.last().unwrap().value, catalog::EDID_MAX);
    }
}
