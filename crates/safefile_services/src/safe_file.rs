use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use safefile_app::{
    FileInfoInfra, FileReaderInfra, FileRemoverInfra, FileRenamerInfra, FileWriterInfra,
    SafeFileService,
};
use safefile_domain::{Result, SafeFileError, SafeState, Sidecar, SidecarGroup};
use tracing::{debug, info, warn};

/// Drives the sidecar state machine for one base path per call.
///
/// Nothing is cached between calls; every operation re-derives the group
/// state from the infra.
#[derive(Clone)]
pub struct SafeFileManager<F> {
    pub(crate) infra: Arc<F>,
}

impl<F> SafeFileManager<F>
where
    F: FileInfoInfra + FileReaderInfra + FileWriterInfra + FileRenamerInfra + FileRemoverInfra,
{
    pub fn new(infra: Arc<F>) -> Self {
        Self { infra }
    }

    pub(crate) fn exists(&self, path: &Path) -> Result<bool> {
        self.infra
            .exists(path)
            .map_err(|e| SafeFileError::read(path, e))
    }

    fn present(&self, group: &SidecarGroup, sidecar: Sidecar) -> Result<bool> {
        self.exists(group.path(sidecar))
    }

    fn state(&self, group: &SidecarGroup) -> Result<SafeState> {
        let base = group.base();
        if self
            .infra
            .is_dir(base)
            .map_err(|e| SafeFileError::read(base, e))?
        {
            return Err(SafeFileError::is_not_a_file(base));
        }

        let state = if self.present(group, Sidecar::Ready)? {
            SafeState::Recoverable
        } else if self.present(group, Sidecar::Backup)? || self.present(group, Sidecar::Tertiary)? {
            SafeState::Recoverable
        } else if self.present(group, Sidecar::Ephemeral)? {
            SafeState::Intervene
        } else if self.present(group, Sidecar::Base)? {
            SafeState::Normal
        } else {
            SafeState::DoesNotExist
        };

        debug!(path = %base.display(), %state, "Classified sidecar group");
        Ok(state)
    }

    fn rename(&self, group: &SidecarGroup, from: Sidecar, to: Sidecar) -> Result<()> {
        let (source, target) = (group.path(from), group.path(to));
        debug!(from = %source.display(), to = %target.display(), "Moving sidecar");
        self.infra
            .rename(source, target)
            .map_err(|e| SafeFileError::write(source, e))
    }

    fn discard_ephemeral(&self, group: &SidecarGroup) -> Result<()> {
        let ephemeral = group.ephemeral();
        if self.exists(ephemeral)? {
            warn!(path = %ephemeral.display(), "Discarding unconfirmed ephemeral payload");
            self.infra
                .remove(ephemeral)
                .map_err(|e| SafeFileError::write(ephemeral, e))?;
        }
        Ok(())
    }

    /// Moves the best available slot into the base.
    ///
    /// A ready payload always wins and demotes the current base to the
    /// backup, replacing whatever the backup held. Without one, an absent
    /// base is restored from the backup, or failing that from the tertiary
    /// slot. The tertiary slot is never written.
    fn promote(&self, group: &SidecarGroup) -> Result<()> {
        if self.present(group, Sidecar::Ready)? {
            if self.present(group, Sidecar::Base)? {
                self.rename(group, Sidecar::Base, Sidecar::Backup)?;
            }
            self.rename(group, Sidecar::Ready, Sidecar::Base)?;
            info!(path = %group.base().display(), "Committed ready payload");
        } else if !self.present(group, Sidecar::Base)? {
            if self.present(group, Sidecar::Backup)? {
                self.rename(group, Sidecar::Backup, Sidecar::Base)?;
                warn!(path = %group.base().display(), "Restored base from backup");
            } else if self.present(group, Sidecar::Tertiary)? {
                self.rename(group, Sidecar::Tertiary, Sidecar::Base)?;
                warn!(path = %group.base().display(), "Restored base from tertiary backup");
            }
        }
        Ok(())
    }

    fn recover_group(&self, group: &SidecarGroup) -> Result<()> {
        self.discard_ephemeral(group)?;
        self.promote(group)
    }

    fn read_group(&self, group: &SidecarGroup) -> Result<Vec<u8>> {
        match self.state(group)? {
            SafeState::DoesNotExist => {
                return Err(SafeFileError::does_not_exist(group.base()));
            }
            // An unconfirmed payload is left for an explicit recover call.
            SafeState::Intervene => {
                warn!(
                    path = %group.ephemeral().display(),
                    "Ephemeral payload requires recovery; not touching it"
                );
            }
            SafeState::Recoverable => {
                self.promote(group)?;
                if self.present(group, Sidecar::Ephemeral)? {
                    warn!(
                        path = %group.ephemeral().display(),
                        "Stale ephemeral payload left in place"
                    );
                }
            }
            SafeState::Normal => {}
        }

        let base = group.base();
        if !self.exists(base)? {
            return Err(SafeFileError::does_not_exist(base));
        }
        self.infra.read(base).map_err(|e| SafeFileError::read(base, e))
    }
}

pub(crate) fn group_for(path: Option<&Path>) -> Result<SidecarGroup> {
    path.map(SidecarGroup::new).ok_or(SafeFileError::InvalidName)
}

impl<F> SafeFileService for SafeFileManager<F>
where
    F: FileInfoInfra + FileReaderInfra + FileWriterInfra + FileRenamerInfra + FileRemoverInfra,
{
    fn classify(&self, path: Option<&Path>) -> Result<SafeState> {
        let group = group_for(path)?;
        self.state(&group)
    }

    fn recover(&self, path: Option<&Path>) -> Result<()> {
        let group = group_for(path)?;
        match self.state(&group)? {
            SafeState::DoesNotExist => Err(SafeFileError::does_not_exist(group.base())),
            SafeState::Normal | SafeState::Recoverable | SafeState::Intervene => {
                self.recover_group(&group)?;
                info!(path = %group.base().display(), "Recovered sidecar group");
                Ok(())
            }
        }
    }

    fn read(&self, path: Option<&Path>) -> Result<Vec<u8>> {
        let group = group_for(path)?;
        self.read_group(&group)
    }

    fn read_utf8(&self, path: Option<&Path>) -> Result<String> {
        let group = group_for(path)?;
        let bytes = self.read_group(&group)?;
        String::from_utf8(bytes).map_err(|e| SafeFileError::read(group.base(), e.into()))
    }

    fn write(&self, path: Option<&Path>, payload: Bytes) -> Result<()> {
        let group = group_for(path)?;
        match self.state(&group)? {
            SafeState::DoesNotExist => {}
            SafeState::Normal | SafeState::Recoverable | SafeState::Intervene => {
                self.recover_group(&group)?;
            }
        }

        let ephemeral = group.ephemeral();
        debug!(path = %ephemeral.display(), bytes = payload.len(), "Staging payload");
        self.infra
            .write(ephemeral, payload)
            .map_err(|e| SafeFileError::write(ephemeral, e))?;

        // Past this rename the payload is known to be complete.
        self.rename(&group, Sidecar::Ephemeral, Sidecar::Ready)?;
        self.promote(&group)
    }
}
