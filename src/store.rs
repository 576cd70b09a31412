//! Durable records: one bincode file per name under a fixed namespace.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};

/// Directory every record lives under, created on first write.
pub(crate) const STORE_DIR: &str = "stored";

/// Canonical record suffix, appended when missing.
pub(crate) const STORE_SUFFIX: &str = ".dat";

/// Resolve a caller-supplied name to its on-disk file name.
pub(crate) fn record_file_name(name: &str) -> String {
    if name.ends_with(STORE_SUFFIX) {
        name.to_string()
    } else {
        format!("{name}{STORE_SUFFIX}")
    }
}

pub(crate) fn write_record<T: Serialize>(value: &T, name: &str) -> Result<PathBuf> {
    write_record_in(Path::new(STORE_DIR), value, name)
}

pub(crate) fn read_record<T: DeserializeOwned>(name: &str) -> Result<T> {
    read_record_in(Path::new(STORE_DIR), name)
}

pub(crate) fn write_record_in<T: Serialize>(dir: &Path, value: &T, name: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| Error::io("creating the record namespace", e))?;
    let path = dir.join(record_file_name(name));

    // Encode into a scratch file first; the rename below is all-or-nothing,
    // so a write that fails partway never clobbers an existing record.
    let tmp =
        NamedTempFile::new_in(dir).map_err(|e| Error::io("creating a scratch record file", e))?;
    let mut writer = BufWriter::new(tmp.as_file());
    bincode::serialize_into(&mut writer, value)
        .map_err(|e| Error::serialization("encoding the record", e))?;
    writer
        .flush()
        .map_err(|e| Error::io("flushing the record", e))?;
    drop(writer);
    tmp.persist(&path)
        .map_err(|e| Error::io("committing the record", e.error))?;

    debug!("wrote record to {:?}", path);
    Ok(path)
}

pub(crate) fn read_record_in<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let file_name = record_file_name(name);
    let path = dir.join(&file_name);
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::NotFound { name: file_name })
        }
        Err(e) => return Err(Error::io("opening the record", e)),
    };
    bincode::deserialize_from(BufReader::new(file))
        .map_err(|e| Error::serialization("decoding the record", e))
}
