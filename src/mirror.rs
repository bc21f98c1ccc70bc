use crate::ChkError;
use log::trace;
use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// A local/remote pair of files driven in lockstep.
///
/// Every operation is applied to the remote file first, then the local file,
/// so both copies always see the identical sequence of writes and seeks. Both
/// handles are released when the pair goes out of scope.
#[derive(Debug)]
pub struct MirrorFile {
    local_path: PathBuf,
    remote_path: PathBuf,
    local: File,
    remote: File,
}
impl MirrorFile {
    /// Create (truncating) both files
    pub fn create(local: &Path, remote: &Path) -> Result<Self, ChkError> {
        trace!("creating mirror pair: {:?} / {:?}", local, remote);
        let remote_file = File::create(remote)?;
        let local_file = File::create(local)?;

        Ok(MirrorFile {
            local_path: local.to_path_buf(),
            remote_path: remote.to_path_buf(),
            local: local_file,
            remote: remote_file,
        })
    }

    /// Write the full buffer to both files at the current cursor
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ChkError> {
        trace!("writing {} bytes to mirror pair", buf.len());
        self.remote.write_all(buf)?;
        self.local.write_all(buf)?;
        Ok(())
    }

    /// Seek both files to the same absolute offset. Seeking past the current
    /// end of file is allowed and leaves a hole behind the cursor.
    pub fn seek(&mut self, offset: u64) -> Result<(), ChkError> {
        trace!("seeking mirror pair to offset {}", offset);
        self.remote.seek(SeekFrom::Start(offset))?;
        self.local.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn remote_path(&self) -> &Path {
        &self.remote_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_data;
    use crate::tests::{init, mirror_roots};

    #[test]
    fn test_mirror_write() {
        init();
        let (local_root, remote_root) = mirror_roots();
        let local = local_root.path().join("pair");
        let remote = remote_root.path().join("pair");

        let buf = random_data(512);
        let mut pair = MirrorFile::create(&local, &remote).unwrap();
        pair.write_all(&buf).unwrap();
        drop(pair);

        let local_data = std::fs::read(&local).unwrap();
        let remote_data = std::fs::read(&remote).unwrap();
        assert_eq!(local_data, buf);
        assert_eq!(remote_data, buf);
    }

    #[test]
    fn test_mirror_seek_leaves_hole() {
        init();
        let (local_root, remote_root) = mirror_roots();
        let local = local_root.path().join("pair");
        let remote = remote_root.path().join("pair");

        let buf = random_data(16);
        let mut pair = MirrorFile::create(&local, &remote).unwrap();
        pair.write_all(&buf).unwrap();
        pair.seek(4096 - 16).unwrap();
        pair.write_all(&buf).unwrap();
        drop(pair);

        let local_data = std::fs::read(&local).unwrap();
        let remote_data = std::fs::read(&remote).unwrap();
        assert_eq!(local_data.len(), 4096);
        assert_eq!(local_data, remote_data);
        assert_eq!(&local_data[..16], buf.as_slice());
        assert_eq!(&local_data[4096 - 16..], buf.as_slice());
        // the unwritten gap reads back as zeroes
        assert!(local_data[16..4096 - 16].iter().all(|b| *b == 0));
    }
}
