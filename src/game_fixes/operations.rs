//! Game fixes operations

mod install;

pub use install::DefaultConfigInstaller;
