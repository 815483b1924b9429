extern crate serde;
extern crate serde_json;

use crate::result;

// Writes the raw API response, pretty-printed with a 4-space indent. The dump
// is never read back by the program.
pub fn save_raw_json(raw_json: &str, path: &str) -> result::LizNextResult<()> {
    use serde::Serialize;

    let value: serde_json::Value = serde_json::from_str(raw_json)?;
    let file = std::fs::File::create(path)?;
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(file, formatter);
    value.serialize(&mut serializer)?;
    return Ok(());
}
