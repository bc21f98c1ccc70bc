use crate::mirror::MirrorFile;
use crate::params::{FileParams, TestParams};
use crate::verify::{self, IntegrityReport};
use crate::{random_data, sparse, ChkError};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cmp;

/// The mirrored local/remote integrity cases.
///
/// The mapping from case name to behavior is enumerated here statically;
/// [`TestCase::from_name`] is the only place a case name is resolved, and an
/// unknown name takes the explicit [`ChkError::InvalidTestCase`] branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCase {
    /// Write a random payload at both ends of the file, hole in the middle
    CreateSparse,
    /// Write a random payload at the tail only, hole at the front
    CreateFrontHole,
    /// Sequential chunked writes of the same payload up to the file size
    WriteData,
    /// Read both files fully and compare
    ReadData,
}
impl TestCase {
    pub const ALL: [TestCase; 4] = [
        TestCase::CreateSparse,
        TestCase::CreateFrontHole,
        TestCase::WriteData,
        TestCase::ReadData,
    ];

    pub fn from_name(name: &str) -> Result<Self, ChkError> {
        match name {
            "create_sparse" => Ok(TestCase::CreateSparse),
            "create_front_hole" => Ok(TestCase::CreateFrontHole),
            "write_data" => Ok(TestCase::WriteData),
            "read_data" => Ok(TestCase::ReadData),
            _ => Err(ChkError::InvalidTestCase(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TestCase::CreateSparse => "create_sparse",
            TestCase::CreateFrontHole => "create_front_hole",
            TestCase::WriteData => "write_data",
            TestCase::ReadData => "read_data",
        }
    }

    /// File prefix under each root; the full name is `<prefix>_<file_size>`
    fn file_prefix(&self) -> &'static str {
        match self {
            TestCase::CreateSparse => "sparse",
            TestCase::CreateFrontHole => "front_hole",
            TestCase::WriteData | TestCase::ReadData => "test_data",
        }
    }

    pub fn run(&self, params: &TestParams) -> Result<CaseOutcome, ChkError> {
        params.validate()?;
        info!(
            "running {} (file_size={}, write_length={})",
            self.name(),
            params.file_size,
            params.write_length
        );
        match self {
            TestCase::CreateSparse => test_create_sparse(params),
            TestCase::CreateFrontHole => test_create_front_hole(params),
            TestCase::WriteData => test_write_data(params),
            TestCase::ReadData => test_read_data(params),
        }
    }
}

/// What a finished case produced.
#[derive(Debug)]
pub enum CaseOutcome {
    /// Files written without error; verification happens in a later case
    Completed,
    /// Comparison verdict from `read_data`
    Report(IntegrityReport),
}
impl CaseOutcome {
    pub fn passed(&self) -> bool {
        match self {
            CaseOutcome::Completed => true,
            CaseOutcome::Report(report) => report.passed(),
        }
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            CaseOutcome::Completed => None,
            CaseOutcome::Report(report) => Some(report.summary()),
        }
    }
}

fn test_create_sparse(params: &TestParams) -> Result<CaseOutcome, ChkError> {
    let data_to_write = random_data(params.write_length);
    let prefix = TestCase::CreateSparse.file_prefix();

    let mut pair = MirrorFile::create(&params.local_file(prefix), &params.remote_file(prefix))?;
    pair.write_all(&data_to_write)?;
    pair.seek(params.file_size - params.write_length as u64)?;
    pair.write_all(&data_to_write)?;

    Ok(CaseOutcome::Completed)
}

fn test_create_front_hole(params: &TestParams) -> Result<CaseOutcome, ChkError> {
    let data_to_write = random_data(params.write_length);
    let prefix = TestCase::CreateFrontHole.file_prefix();

    let mut pair = MirrorFile::create(&params.local_file(prefix), &params.remote_file(prefix))?;
    pair.seek(params.file_size - params.write_length as u64)?;
    pair.write_all(&data_to_write)?;

    Ok(CaseOutcome::Completed)
}

fn test_write_data(params: &TestParams) -> Result<CaseOutcome, ChkError> {
    let data_to_write = random_data(params.write_length);
    let prefix = TestCase::WriteData.file_prefix();

    let mut pair = MirrorFile::create(&params.local_file(prefix), &params.remote_file(prefix))?;

    let mut written: u64 = 0;
    while written < params.file_size {
        let to_write = cmp::min(params.write_length as u64, params.file_size - written) as usize;
        pair.write_all(&data_to_write[..to_write])?;

        // the counter advances by the full write length even when the final
        // chunk is short; historical accounting, kept as-is
        written += params.write_length as u64;
    }
    debug!("write_data finished with counter at {}", written);

    Ok(CaseOutcome::Completed)
}

fn test_read_data(params: &TestParams) -> Result<CaseOutcome, ChkError> {
    let prefix = TestCase::ReadData.file_prefix();
    let report = verify::compare_files(
        &params.local_file(prefix),
        &params.remote_file(prefix),
        params.file_size,
    )?;

    if report.passed() {
        println!("Data Integrity Test Passed");
    } else {
        println!("Data Integrity Test Failed");
    }

    Ok(CaseOutcome::Report(report))
}

/// The single-file creation cases of the `create_file` entrypoint. Only
/// `sparse` exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateCase {
    Sparse,
}
impl CreateCase {
    pub fn from_name(name: &str) -> Result<Self, ChkError> {
        match name {
            "sparse" => Ok(CreateCase::Sparse),
            _ => Err(ChkError::InvalidTestCase(name.to_string())),
        }
    }

    pub fn run(&self, params: &FileParams) -> Result<(), ChkError> {
        params.validate()?;
        match self {
            CreateCase::Sparse => {
                sparse::create_sparse_file(&params.file_name, params.file_size, params.write_length)?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{init, mirror_roots};

    fn params(file_size: u64, write_length: usize) -> (TestParams, tempfile::TempDir, tempfile::TempDir) {
        let (local_root, remote_root) = mirror_roots();
        let params = TestParams::new(
            local_root.path(),
            remote_root.path(),
            file_size,
            write_length,
        );
        (params, local_root, remote_root)
    }

    #[test]
    fn test_case_names_round_trip() {
        init();
        for case in TestCase::ALL {
            assert_eq!(TestCase::from_name(case.name()).unwrap(), case);
        }
    }

    #[test]
    fn test_unknown_case_is_rejected() {
        init();
        let result = TestCase::from_name("create_sparse_v2");
        assert!(matches!(result, Err(ChkError::InvalidTestCase(_))));

        let result = CreateCase::from_name("dense");
        assert!(matches!(result, Err(ChkError::InvalidTestCase(_))));
    }

    #[test]
    fn test_create_sparse_mirrors_match() {
        init();
        let (params, _local_root, _remote_root) = params(65536, 4096);

        let outcome = TestCase::CreateSparse.run(&params).unwrap();
        assert!(outcome.passed());

        let local = std::fs::read(params.local_file("sparse")).unwrap();
        let remote = std::fs::read(params.remote_file("sparse")).unwrap();
        assert_eq!(local.len(), 65536);
        assert_eq!(local, remote);
        // head and tail carry the payload, the gap reads back as zeroes
        assert_eq!(local[..4096], local[65536 - 4096..]);
        assert!(local[4096..65536 - 4096].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_create_front_hole_mirrors_match() {
        init();
        let (params, _local_root, _remote_root) = params(65536, 4096);

        let outcome = TestCase::CreateFrontHole.run(&params).unwrap();
        assert!(outcome.passed());

        let local = std::fs::read(params.local_file("front_hole")).unwrap();
        let remote = std::fs::read(params.remote_file("front_hole")).unwrap();
        assert_eq!(local.len(), 65536);
        assert_eq!(local, remote);
        assert!(local[..65536 - 4096].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_write_then_read_exact_multiple() {
        init();
        let (params, _local_root, _remote_root) = params(4096, 512);

        TestCase::WriteData.run(&params).unwrap();

        let local = std::fs::read(params.local_file("test_data")).unwrap();
        assert_eq!(local.len(), 4096);

        let outcome = TestCase::ReadData.run(&params).unwrap();
        assert!(outcome.passed());
        assert_eq!(outcome.detail().unwrap(), "ok");
    }

    #[test]
    fn test_write_data_uneven_final_chunk() {
        init();
        // 3 full chunks of 512 plus a short 164-byte tail
        let (params, _local_root, _remote_root) = params(1700, 512);

        TestCase::WriteData.run(&params).unwrap();

        let local = std::fs::read(params.local_file("test_data")).unwrap();
        let remote = std::fs::read(params.remote_file("test_data")).unwrap();
        assert_eq!(local, remote);
        assert_eq!(local.len(), 1700);
        // the final chunk is a prefix of the payload
        assert_eq!(local[1536..], local[..164]);

        let outcome = TestCase::ReadData.run(&params).unwrap();
        assert!(outcome.passed());
    }

    #[test]
    fn test_read_data_detects_divergence() {
        init();
        let (params, _local_root, _remote_root) = params(1024, 256);

        TestCase::WriteData.run(&params).unwrap();

        // corrupt one byte on the remote side
        let remote_path = params.remote_file("test_data");
        let mut data = std::fs::read(&remote_path).unwrap();
        data[100] ^= 0xFF;
        std::fs::write(&remote_path, &data).unwrap();

        let outcome = TestCase::ReadData.run(&params).unwrap();
        assert!(!outcome.passed());
    }

    #[test]
    fn test_read_data_detects_truncation() {
        init();
        let (params, _local_root, _remote_root) = params(1024, 256);

        TestCase::WriteData.run(&params).unwrap();

        let remote_path = params.remote_file("test_data");
        let data = std::fs::read(&remote_path).unwrap();
        std::fs::write(&remote_path, &data[..512]).unwrap();

        let outcome = TestCase::ReadData.run(&params).unwrap();
        assert!(!outcome.passed());
    }

    #[test]
    fn test_create_case_sparse() {
        init();
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("sparse_8192");

        let case = CreateCase::from_name("sparse").unwrap();
        case.run(&FileParams::new(&file, 8192, 1024)).unwrap();

        let data = std::fs::read(&file).unwrap();
        assert_eq!(data.len(), 8192);
        assert!(data[..1024].iter().all(|b| *b == sparse::FILL_BYTE));
        assert!(data[8192 - 1024..].iter().all(|b| *b == sparse::FILL_BYTE));
    }
}
