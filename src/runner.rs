//! @ai:module:intent Drive one run: obtain the diagnostic stream, translate, report
//! @ai:module:layer application
//! @ai:module:public_api run, read_input
//! @ai:module:depends_on command, config, decoder, translator, error

use crate::command::CargoCommand;
use crate::config::Config;
use crate::decoder::decode;
use crate::error::{Error, Result};
use crate::translator::{translate, Summary};
use std::io::{Read, Write};
use std::path::Path;

/// @ai:intent Run cargo (or read a captured stream) and write annotations to `out`
/// @ai:effects io
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Summary> {
    let (stdout, status) = match &config.input {
        Some(path) => (read_input(path)?, None),
        None => {
            let captured = CargoCommand::from_config(config)?.run()?;
            (captured.stdout, Some(captured.status))
        }
    };

    let summary = translate(decode(&stdout), config.with_annotation, out)?;
    out.flush()?;

    tracing::info!("{} diagnostic(s) reported", summary.reported);

    if let Some(status) = status.filter(|s| !s.success()) {
        if !summary.found_any() {
            tracing::warn!(
                "{} failed ({}) without reporting any diagnostics",
                config.program,
                status
            );
        }
    }

    Ok(summary)
}

/// @ai:intent Load a captured JSON stream from a file, or stdin for `-`
/// @ai:effects fs:read
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();

    if path == Path::new("-") {
        std::io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .map_err(|source| Error::ReadInput {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(buffer);
    }

    std::fs::read(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}
