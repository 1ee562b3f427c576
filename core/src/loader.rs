use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{Error, Result};

/// Read a whole file as UTF-8 text.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let file_read = |source| Error::FileRead { path: path.to_path_buf(), source };
    let mut f = File::open(path).map_err(file_read)?;
    let mut buf = String::new();
    f.read_to_string(&mut buf).map_err(file_read)?;
    tracing::debug!(path = %path.display(), bytes = buf.len(), "read file");
    Ok(buf)
}
