use serde::de::DeserializeOwned;
use std::{fs, io::Read, path::Path};

/// Read a value (usually a wire graph) from JSON.
pub fn read_json<T: DeserializeOwned>(r: impl Read) -> anyhow::Result<T> {
    let value = serde_json::from_reader(r)?;
    Ok(value)
}

/// Read a value from the JSON file at `path`.
pub fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();

    let file = fs::File::open(path)
        .map_err(|error| anyhow::anyhow!("failed to open {}: {error}", path.display()))?;

    read_json(std::io::BufReader::new(file))
}
