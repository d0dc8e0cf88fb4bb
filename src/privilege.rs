use nix::unistd::{
    self,
    Uid,
};

use crate::{
    error::{
        PrivilegeError,
        Result,
    },
    sysfs::{
        self,
        Device,
        BRIGHTNESS,
    },
};

/// The three identity operations the writer needs from the OS.
pub trait Credentials {
    fn effective(&self) -> Uid;
    fn real(&self) -> Uid;
    fn set_effective(&self, uid: Uid) -> nix::Result<()>;
}

/// The calling process, via `geteuid`/`getuid`/`seteuid`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Process;

impl Credentials for Process {
    #[inline]
    fn effective(&self) -> Uid {
        unistd::geteuid()
    }

    #[inline]
    fn real(&self) -> Uid {
        unistd::getuid()
    }

    #[inline]
    fn set_effective(&self, uid: Uid) -> nix::Result<()> {
        unistd::seteuid(uid)
    }
}

/// Holds an elevated effective uid. The caller's uid comes back on
/// [`PrivilegeGuard::restore`], or on drop if that was never called.
pub struct PrivilegeGuard<'a, C: Credentials> {
    creds: &'a C,
    saved: Uid,
    restored: bool,
}

impl<'a, C: Credentials> PrivilegeGuard<'a, C> {
    pub fn elevate(creds: &'a C, to: Uid) -> Result<PrivilegeGuard<'a, C>, PrivilegeError> {
        let saved = creds.effective();
        creds
            .set_effective(to)
            .map_err(|source| PrivilegeError::Elevate { uid: to, source })?;
        log::debug!("elevated effective uid {} -> {}", saved, to);

        Ok(Self {
            creds,
            saved,
            restored: false,
        })
    }

    #[inline]
    pub fn saved(&self) -> Uid {
        self.saved
    }

    pub fn restore(mut self) -> Result<(), PrivilegeError> {
        self.restored = true;
        self.do_restore()
    }

    fn do_restore(&self) -> Result<(), PrivilegeError> {
        self.creds
            .set_effective(self.saved)
            .map_err(|source| PrivilegeError::Restore {
                uid: self.saved,
                source,
            })?;
        log::debug!("restored effective uid {}", self.saved);
        Ok(())
    }
}

impl<C: Credentials> Drop for PrivilegeGuard<'_, C> {
    fn drop(&mut self) {
        if !self.restored {
            if let Err(e) = self.do_restore() {
                log::error!("{}", e);
            }
        }
    }
}

/// Lowers the effective uid to the real one, for a setuid start.
pub fn drop_to_real<C: Credentials>(creds: &C) -> Result<(), PrivilegeError> {
    let (effective, real) = (creds.effective(), creds.real());
    if effective == real {
        return Ok(());
    }

    creds
        .set_effective(real)
        .map_err(|source| PrivilegeError::Restore { uid: real, source })?;
    log::debug!("dropped effective uid {} -> {}", effective, real);
    Ok(())
}

/// Writes `value` to the device's brightness attribute as root.
///
/// Elevation covers the single write and nothing else. The original uid is
/// restored whether or not the write worked; a failed restore wins over a
/// failed write.
pub fn set_brightness<C: Credentials>(creds: &C, device: &Device, value: &str) -> crate::Result<()> {
    let path = device.attribute_path(BRIGHTNESS);

    let guard = PrivilegeGuard::elevate(creds, Uid::from_raw(0))?;
    let written = sysfs::write_value(&path, value);
    let restored = guard.restore();

    if let Err(e) = restored {
        if let Err(write_err) = &written {
            log::error!("{}", write_err);
        }
        return Err(e.into());
    }
    written
}
