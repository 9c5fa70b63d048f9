use std::path::Path;

use bytes::Bytes;
use safefile_app::{
    FileInfoInfra, FileReaderInfra, FileRemoverInfra, FileRenamerInfra, FileService,
    FileWriterInfra,
};
use safefile_domain::{Result, SafeFileError};

use crate::SafeFileManager;

impl<F> FileService for SafeFileManager<F>
where
    F: FileInfoInfra + FileReaderInfra + FileWriterInfra + FileRenamerInfra + FileRemoverInfra,
{
    fn read_file(&self, path: Option<&Path>) -> Result<Vec<u8>> {
        let path = path.ok_or(SafeFileError::InvalidName)?;
        if !self.exists(path)? {
            return Err(SafeFileError::does_not_exist(path));
        }
        if !self
            .infra
            .is_file(path)
            .map_err(|e| SafeFileError::read(path, e))?
        {
            return Err(SafeFileError::is_not_a_file(path));
        }
        self.infra.read(path).map_err(|e| SafeFileError::read(path, e))
    }

    fn write_file(&self, path: Option<&Path>, payload: Bytes) -> Result<()> {
        let path = path.ok_or(SafeFileError::InvalidName)?;
        if self.exists(path)?
            && !self
                .infra
                .is_file(path)
                .map_err(|e| SafeFileError::read(path, e))?
        {
            return Err(SafeFileError::is_not_a_file(path));
        }
        self.infra
            .write(path, payload)
            .map_err(|e| SafeFileError::write(path, e))
    }
}
