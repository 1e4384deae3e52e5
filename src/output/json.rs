//! JSON inventory writer.

use crate::processing::SubnetVlanMap;
use serde::Serialize;
use std::error::Error;
use std::io::Write;

/// Serialize the inventory with 4-space indentation.
pub fn to_json(subnets: &SubnetVlanMap) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut json = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut json, formatter);
    subnets
        .serialize(&mut serializer)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}

/// Write the inventory to `path`, replacing any existing file (mode 0644 on Unix).
pub fn write_subnets(path: &str, subnets: &SubnetVlanMap) -> Result<(), Box<dyn Error>> {
    let json = to_json(subnets)?;

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let mut file = options
        .open(path)
        .map_err(|e| format!("Error creating {path}: {e}"))?;
    file.write_all(&json)
        .map_err(|e| format!("Error writing {path}: {e}"))?;

    log::info!("Wrote {} subnets to {path}", subnets.len());
    Ok(())
}
