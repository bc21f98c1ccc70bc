use crate::cases::TestCase;
use crate::params::TestParams;
use crate::ChkError;
use bytesize::ByteSize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Suite configuration.
///
/// ```yaml
/// local_path: /mnt/local
/// remote_path: /mnt/remote
/// cases:
///   - case: create_sparse
///     file_size: 4MiB
///     write_length: 4KiB
///   - case: write_data
///     file_size: 1MiB
///     write_length: 128KiB
///   - case: read_data
///     file_size: 1MiB
///     write_length: 128KiB
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Directory root reached through the local storage endpoint
    pub local_path: PathBuf,

    /// Directory root reached through the remote storage endpoint
    pub remote_path: PathBuf,

    /// Cases to run, in order
    pub cases: Vec<CaseSpec>,
}
impl SuiteConfig {
    pub fn load(path: &Path) -> Result<Self, ChkError> {
        let raw = std::fs::read_to_string(path)?;
        let config: SuiteConfig = serde_yaml::from_str(&raw)?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseSpec {
    pub case: TestCase,
    pub file_size: ByteSize,
    pub write_length: ByteSize,
}
impl CaseSpec {
    /// Materialize the parameters for this entry against the suite's roots
    pub fn params(&self, config: &SuiteConfig) -> TestParams {
        TestParams::new(
            &config.local_path,
            &config.remote_path,
            self.file_size.as_u64(),
            self.write_length.as_u64() as usize,
        )
    }
}
