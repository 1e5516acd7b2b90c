// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing the commit-msg hook.

use crate::error::{GateError, HookError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::CommitMsgHook;

/// State of the commit-msg hook in a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// No commit-msg hook exists.
    NotInstalled,
    /// The hook was installed by commitgate.
    Installed,
    /// Some other commit-msg hook is present.
    Foreign,
}

/// Manager for the commit-msg hook.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Ok(Self::for_dir(repo.git_dir().join("hooks")))
    }

    /// Create a hook manager for an explicit hooks directory.
    pub fn for_dir(hooks_dir: impl Into<PathBuf>) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
        }
    }

    fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(CommitMsgHook.filename())
    }

    fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(CommitMsgHook.backup_filename())
    }

    /// Install the hook.
    ///
    /// An existing foreign hook is only replaced with `force`, and is kept
    /// as a backup so that uninstalling restores it. An existing backup is
    /// never overwritten.
    pub fn install(&self, force: bool) -> Result<()> {
        let hook = CommitMsgHook;
        let hook_path = self.hook_path();

        if self.status()? == HookStatus::Foreign {
            if !force {
                return Err(GateError::Hook(HookError::AlreadyExists {
                    hook: hook.filename().to_string(),
                }));
            }

            let backup_path = self.backup_path();
            if backup_path.exists() {
                return Err(install_failed(format!(
                    "Backup {} already exists; move it away first",
                    backup_path.display()
                )));
            }

            tracing::debug!("Backing up existing hook to {:?}", backup_path);
            fs::rename(&hook_path, &backup_path)
                .map_err(|e| install_failed(format!("Failed to backup existing hook: {}", e)))?;
        }

        fs::create_dir_all(&self.hooks_dir)
            .map_err(|e| install_failed(format!("Failed to create hooks directory: {}", e)))?;

        fs::write(&hook_path, hook.generate())
            .map_err(|e| install_failed(format!("Failed to write hook: {}", e)))?;

        make_executable(&hook_path)?;

        tracing::debug!("Installed hook at {:?}", hook_path);
        Ok(())
    }

    /// Uninstall the hook, restoring any backed-up foreign hook.
    pub fn uninstall(&self) -> Result<()> {
        let hook = CommitMsgHook;
        let hook_path = self.hook_path();

        match self.status()? {
            HookStatus::NotInstalled => return Ok(()),
            HookStatus::Foreign => {
                return Err(GateError::Hook(HookError::RemoveFailed {
                    hook: hook.filename().to_string(),
                    message: "Hook was not installed by commitgate".to_string(),
                }));
            }
            HookStatus::Installed => {}
        }

        fs::remove_file(&hook_path).map_err(|e| {
            GateError::Hook(HookError::RemoveFailed {
                hook: hook.filename().to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        let backup_path = self.backup_path();
        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                GateError::Hook(HookError::RemoveFailed {
                    hook: hook.filename().to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(())
    }

    /// Get the status of the hook.
    pub fn status(&self) -> Result<HookStatus> {
        let hook_path = self.hook_path();

        if !hook_path.exists() {
            return Ok(HookStatus::NotInstalled);
        }

        let content = fs::read_to_string(&hook_path)?;
        if CommitMsgHook::is_ours(&content) {
            Ok(HookStatus::Installed)
        } else {
            Ok(HookStatus::Foreign)
        }
    }
}

fn install_failed(message: String) -> GateError {
    GateError::Hook(HookError::InstallFailed {
        hook: CommitMsgHook.filename().to_string(),
        message,
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| install_failed(format!("Failed to get permissions: {}", e)))?
        .permissions();

    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .map_err(|e| install_failed(format!("Failed to set permissions: {}", e)))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
