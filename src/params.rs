use crate::ChkError;
use std::path::{Path, PathBuf};

/// Parameters for the mirrored local/remote integrity cases.
///
/// `local_path` and `remote_path` are two directory roots backed by different
/// storage endpoints. Every case writes (or reads) the same relative filename
/// under both roots.
#[derive(Debug, Clone)]
pub struct TestParams {
    pub local_path: PathBuf,
    pub remote_path: PathBuf,
    /// Total logical size of the file under test, in bytes
    pub file_size: u64,
    /// Size of a single write payload, in bytes
    pub write_length: usize,
}
impl TestParams {
    pub fn new(
        local_path: impl Into<PathBuf>,
        remote_path: impl Into<PathBuf>,
        file_size: u64,
        write_length: usize,
    ) -> Self {
        TestParams {
            local_path: local_path.into(),
            remote_path: remote_path.into(),
            file_size,
            write_length,
        }
    }

    pub fn validate(&self) -> Result<(), ChkError> {
        validate_lengths(self.file_size, self.write_length)
    }

    /// Path of the test file under the local root. Files are named
    /// `<prefix>_<file_size>` so runs with different sizes don't collide.
    pub fn local_file(&self, prefix: &str) -> PathBuf {
        self.local_path.join(format!("{}_{}", prefix, self.file_size))
    }

    /// Path of the test file under the remote root
    pub fn remote_file(&self, prefix: &str) -> PathBuf {
        self.remote_path.join(format!("{}_{}", prefix, self.file_size))
    }
}

/// Parameters for the single-file creation cases.
#[derive(Debug, Clone)]
pub struct FileParams {
    pub file_name: PathBuf,
    pub file_size: u64,
    pub write_length: usize,
}
impl FileParams {
    pub fn new(file_name: impl AsRef<Path>, file_size: u64, write_length: usize) -> Self {
        FileParams {
            file_name: file_name.as_ref().to_path_buf(),
            file_size,
            write_length,
        }
    }

    pub fn validate(&self) -> Result<(), ChkError> {
        validate_lengths(self.file_size, self.write_length)
    }
}

fn validate_lengths(file_size: u64, write_length: usize) -> Result<(), ChkError> {
    if write_length == 0 {
        return Err(ChkError::InvalidParams(
            "write_length must be non-zero".to_string(),
        ));
    }
    if write_length as u64 > file_size {
        return Err(ChkError::InvalidParams(format!(
            "write_length {} exceeds file_size {}",
            write_length, file_size
        )));
    }
    Ok(())
}
