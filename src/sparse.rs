use crate::ChkError;
use log::debug;
use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

/// Fill byte for the fixed-pattern sparse files
pub const FILL_BYTE: u8 = b'A';

/// Create a sparse file with a hole in the middle: `write_length` fill bytes
/// at offset 0, then the same payload again at `file_size - write_length`.
///
/// Returns the payload so callers can verify the head and tail regions.
pub fn create_sparse_file(
    path: &Path,
    file_size: u64,
    write_length: usize,
) -> Result<Vec<u8>, ChkError> {
    if write_length as u64 > file_size {
        return Err(ChkError::InvalidParams(format!(
            "write_length {} exceeds file_size {}",
            write_length, file_size
        )));
    }
    let payload = vec![FILL_BYTE; write_length];

    let mut file = File::create(path)?;
    file.write_all(&payload)?;
    file.seek(SeekFrom::Start(file_size - write_length as u64))?;
    file.write_all(&payload)?;

    debug!(
        "created sparse file {:?} (size {}, {} bytes written at each end)",
        path, file_size, write_length
    );
    Ok(payload)
}

/// Physical bytes allocated for the file, per `st_blocks`. On filesystems
/// that support holes this is smaller than the logical size for a sparse
/// file; informational only, since hole materialization varies by filesystem.
#[cfg(unix)]
pub fn allocated_size(path: &Path) -> Result<u64, ChkError> {
    use std::os::unix::fs::MetadataExt;
    let meta = std::fs::metadata(path)?;
    Ok(meta.blocks() * 512)
}
