//! Zip extraction of the runtime distribution

use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::error::RuntimeResult;
use crate::tool::types::{ArchiveExtractor, CancelToken};

/// Extracts a zip archive, keeping Unix permissions and symlinks
pub struct ZipExtractor;

impl ArchiveExtractor for ZipExtractor {
    fn extract(&self, archive: &Path, dest: &Path, cancel: &CancelToken) -> RuntimeResult<()> {
        let reader = BufReader::new(File::open(archive)?);
        let mut archive = ZipArchive::new(reader)?;
        fs::create_dir_all(dest)?;

        for i in 0..archive.len() {
            cancel.check()?;

            let mut entry = archive.by_index(i)?;
            let outpath = match entry.enclosed_name() {
                Some(path) => dest.join(path),
                None => {
                    tracing::warn!("skipping archive entry outside destination: {}", entry.name());
                    continue;
                }
            };

            if entry.is_dir() {
                fs::create_dir_all(&outpath)?;
            } else if entry.is_symlink() {
                // Entry data is the link target
                let mut target = String::new();
                entry.read_to_string(&mut target)?;
                if let Some(parent) = outpath.parent() {
                    fs::create_dir_all(parent)?;
                }
                std::os::unix::fs::symlink(&target, &outpath)?;
                continue;
            } else {
                if let Some(parent) = outpath.parent() {
                    fs::create_dir_all(parent)?;
                }
                let mut outfile = File::create(&outpath)?;
                io::copy(&mut entry, &mut outfile)?;
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = entry.unix_mode() {
                    fs::set_permissions(&outpath, fs::Permissions::from_mode(mode))?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn build_zip(path: &Path) {
        let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
        zip.add_directory("bin/", SimpleFileOptions::default()).unwrap();
        zip.start_file(
            "bin/wine",
            SimpleFileOptions::default().unix_permissions(0o755),
        )
        .unwrap();
        zip.write_all(b"#!/bin/sh\nexit 0\n").unwrap();
        zip.start_file("share/wine/wine.inf", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"[Version]\n").unwrap();
        zip.finish().unwrap();
    }

    #[test]
    fn test_extracts_tree_with_modes() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("runtime.zip");
        build_zip(&archive);

        let dest = dir.path().join("beta");
        ZipExtractor
            .extract(&archive, &dest, &CancelToken::new())
            .unwrap();

        assert!(dest.join("share/wine/wine.inf").is_file());
        let wine = dest.join("bin/wine");
        assert_eq!(fs::read_to_string(&wine).unwrap(), "#!/bin/sh\nexit 0\n");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&wine).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }

    #[test]
    fn test_symlinks_stay_links() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("runtime.zip");
        let mut zip = zip::ZipWriter::new(File::create(&archive).unwrap());
        zip.start_file(
            "bin/wine",
            SimpleFileOptions::default().unix_permissions(0o755),
        )
        .unwrap();
        zip.write_all(b"#!/bin/sh\nexit 0\n").unwrap();
        zip.add_symlink("bin/wine64", "wine", SimpleFileOptions::default())
            .unwrap();
        zip.add_symlink(
            "lib/wine/libwine.so.1",
            "libwine.so.1.0",
            SimpleFileOptions::default(),
        )
        .unwrap();
        zip.start_file("lib/wine/libwine.so.1.0", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"ELF").unwrap();
        zip.finish().unwrap();

        let dest = dir.path().join("beta");
        ZipExtractor
            .extract(&archive, &dest, &CancelToken::new())
            .unwrap();

        let wine64 = dest.join("bin/wine64");
        assert!(fs::symlink_metadata(&wine64).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(&wine64).unwrap(), Path::new("wine"));
        assert_eq!(fs::read_to_string(&wine64).unwrap(), "#!/bin/sh\nexit 0\n");

        // link extracted before its target
        let so = dest.join("lib/wine/libwine.so.1");
        assert!(fs::symlink_metadata(&so).unwrap().file_type().is_symlink());
        assert_eq!(fs::read(&so).unwrap(), b"ELF");
    }

    #[test]
    fn test_not_a_zip() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("runtime.zip");
        fs::write(&archive, "<html>rate limited</html>").unwrap();

        let result = ZipExtractor.extract(&archive, &dir.path().join("beta"), &CancelToken::new());
        assert!(matches!(result, Err(RuntimeError::Archive(_))));
    }

    #[test]
    fn test_cancelled_extraction_stops() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("runtime.zip");
        build_zip(&archive);

        let token = CancelToken::new();
        token.cancel();
        let dest = dir.path().join("beta");
        let result = ZipExtractor.extract(&archive, &dest, &token);

        assert!(matches!(result, Err(RuntimeError::Cancelled)));
        assert!(!dest.join("bin/wine").exists());
    }
}
