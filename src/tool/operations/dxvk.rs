//! DXVK install into the prefix
//!
//! The runtime distribution ships DXVK under `dxvk/x64` and `dxvk/x32`. The DLLs are
//! copied over Wine's builtins and switched to `native` in the registry.

use std::fs;

use crate::error::{RuntimeError, RuntimeResult};
use crate::manager::RuntimeManager;
use crate::tool::types::GraphicsInstaller;

pub const DXVK_DLLS: [&str; 4] = ["d3d9", "d3d10core", "d3d11", "dxgi"];

pub const DLL_OVERRIDES_KEY: &str = r"HKEY_CURRENT_USER\Software\Wine\DllOverrides";

/// (payload subdirectory, prefix system directory, required)
const ARCH_TARGETS: [(&str, &str, bool); 2] =
    [("x64", "system32", true), ("x32", "syswow64", false)];

pub struct DxvkInstaller;

impl GraphicsInstaller for DxvkInstaller {
    fn install(&self, manager: &RuntimeManager) -> RuntimeResult<()> {
        let settings = manager.settings();
        let payload = settings.tool_dir().join("dxvk");
        let windows = settings.prefix_dir.join("drive_c").join("windows");

        for (arch, target, required) in ARCH_TARGETS {
            let src = payload.join(arch);
            if !src.is_dir() {
                if required {
                    return Err(RuntimeError::GraphicsInstall(format!(
                        "DXVK payload not found at {}",
                        src.display()
                    )));
                }
                tracing::debug!("no {arch} DXVK payload, skipping {target}");
                continue;
            }

            let dest = windows.join(target);
            fs::create_dir_all(&dest)?;
            for dll in DXVK_DLLS {
                let file = format!("{dll}.dll");
                let from = src.join(&file);
                if !from.is_file() {
                    return Err(RuntimeError::GraphicsInstall(format!(
                        "{} missing from DXVK payload",
                        from.display()
                    )));
                }
                fs::copy(&from, dest.join(&file))?;
            }
            tracing::debug!("installed {arch} DXVK into {}", dest.display());
        }

        for dll in DXVK_DLLS {
            let status = manager.reg_add(DLL_OVERRIDES_KEY, dll, "native")?;
            if !status.success() {
                return Err(RuntimeError::GraphicsInstall(format!(
                    "registering {dll} as native override exited with {status}"
                )));
            }
        }
        Ok(())
    }
}
