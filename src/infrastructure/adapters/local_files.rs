//! 로컬 파일 포트 구현 어댑터.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;

use crate::application::ports::LocalFiles;

/// 기준 디렉터리 아래에서 파일을 여는 어댑터. 절대 경로는 그대로 쓴다.
#[derive(Debug, Clone)]
pub struct FsLocalFiles {
    base: PathBuf,
}

impl Default for FsLocalFiles {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FsLocalFiles {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.base.join(name)
    }
}

impl LocalFiles for FsLocalFiles {
    fn open(&self, name: &str) -> io::Result<File> {
        File::open(self.path(name))
    }

    fn create(&self, name: &str) -> io::Result<File> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        options.open(self.path(name))
    }
}
