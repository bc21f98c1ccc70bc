use crate::ChkError;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read the entire file into memory, echoing the path and byte count
pub fn read_all_data(path: &Path) -> Result<(Vec<u8>, u64), ChkError> {
    let data = std::fs::read(path)?;
    let num_bytes = data.len() as u64;

    println!("Data Read : {} : {}", path.display(), num_bytes);
    Ok((data, num_bytes))
}

/// Verdict of a local/remote file comparison.
///
/// `reasons` is empty when the two files are byte-identical and both match
/// the expected length.
#[derive(Debug)]
pub struct IntegrityReport {
    pub local_len: u64,
    pub remote_len: u64,
    pub expected_len: u64,
    pub reasons: Vec<String>,
}
impl IntegrityReport {
    pub fn passed(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.passed() {
            "ok".to_string()
        } else {
            self.reasons.join("; ")
        }
    }
}

/// Compare the mirrored pair byte-for-byte and against the expected length
pub fn compare_files(
    local: &Path,
    remote: &Path,
    expected_len: u64,
) -> Result<IntegrityReport, ChkError> {
    let (remote_data, remote_len) = read_all_data(remote)?;
    let (local_data, local_len) = read_all_data(local)?;

    let mut reasons = Vec::new();
    if local_len != remote_len {
        reasons.push(format!(
            "length mismatch: local {} vs remote {}",
            local_len, remote_len
        ));
    }
    if remote_len != expected_len {
        reasons.push(format!(
            "remote length {} != expected {}",
            remote_len, expected_len
        ));
    }
    if local_data != remote_data {
        reasons.push("local and remote contents differ".to_string());
    }

    for reason in &reasons {
        warn!("integrity check: {}", reason);
    }

    Ok(IntegrityReport {
        local_len,
        remote_len,
        expected_len,
        reasons,
    })
}

/// A single difference found by [`compare_trees`], keyed by the path relative
/// to the roots.
#[derive(Debug, PartialEq, Eq)]
pub enum TreeDiff {
    /// File exists under the local root but not the remote root
    MissingRemote(PathBuf),
    /// Both files exist but their bytes differ
    ContentMismatch(PathBuf),
}

/// Walk every regular file under `local_root` and compare it byte-for-byte
/// against the file at the same relative path under `remote_root`.
pub fn compare_trees(local_root: &Path, remote_root: &Path) -> Result<Vec<TreeDiff>, ChkError> {
    let mut diffs = Vec::new();

    for entry in WalkDir::new(local_root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(local_root)
            .expect("walkdir yields paths under its root");
        let counterpart = remote_root.join(rel);

        if !counterpart.is_file() {
            diffs.push(TreeDiff::MissingRemote(rel.to_path_buf()));
            continue;
        }

        let local_data = std::fs::read(entry.path())?;
        let remote_data = std::fs::read(&counterpart)?;
        if local_data != remote_data {
            diffs.push(TreeDiff::ContentMismatch(rel.to_path_buf()));
        } else {
            debug!("tree compare: {:?} matches", rel);
        }
    }

    Ok(diffs)
}
