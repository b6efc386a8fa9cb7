//! Provisioning operations - default collaborators

mod dxvk;
mod extract;
mod fetch;

pub use dxvk::{DLL_OVERRIDES_KEY, DXVK_DLLS, DxvkInstaller};
pub use extract::ZipExtractor;
pub use fetch::HttpFetcher;
