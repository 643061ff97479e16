use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::store::TableStore;
use crate::ui::messages::{info, success};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the sheet to `dest_file`. With `compress` the copy is a zip
    /// archive next to it (`dest_file` with a `.zip` extension) and
    /// `dest_file` itself is never written.
    ///
    /// Returns the path of the file actually written.
    pub fn backup(
        store: &TableStore,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = store.path();
        let dest = Path::new(dest_file);

        // 1️⃣ Check the sheet exists
        if !store.exists() {
            return Err(AppError::StoreNotFound(src.display().to_string()));
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        // 2️⃣ The sheet is never its own backup
        if same_file(src, &target)? {
            return Err(AppError::Other(format!(
                "backup target is the sheet itself: {}",
                target.display()
            )));
        }

        // 3️⃣ Ensure destination folder exists
        let dir = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        // 4️⃣ Never overwrite silently
        ensure_writable(&target, force)?;

        // 5️⃣ Stage in the target folder, then move into place
        let mut staged = NamedTempFile::new_in(&dir)?;
        if compress {
            write_zip(src, entry_name(src, dest), staged.as_file_mut())?;
        } else {
            let mut sheet = fs::File::open(src)?;
            std::io::copy(&mut sheet, staged.as_file_mut())?;
        }
        staged.as_file_mut().flush()?;
        staged.persist(&target).map_err(|e| e.error)?;

        if compress {
            info(format!("Compressed: {}", target.display()));
        }
        success(format!("Backup created: {}", target.display()));

        Ok(target)
    }
}

/// Both paths name the same existing file.
fn same_file(a: &Path, b: &Path) -> AppResult<bool> {
    if !b.exists() {
        return Ok(false);
    }
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}

/// Name of the sheet inside the archive: the requested file name, unless
/// that already is the archive name.
fn entry_name(src: &Path, dest: &Path) -> String {
    let from = if dest.extension().is_some_and(|e| e.eq_ignore_ascii_case("zip")) {
        src
    } else {
        dest
    };
    from.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "timesheet.csv".to_string())
}

/// Write a zip holding the content of `src` as `name`.
fn write_zip(src: &Path, name: String, out: &mut fs::File) -> AppResult<()> {
    let mut zip = ZipWriter::new(out);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut sheet = fs::File::open(src)?;
    zip.start_file(name, options).map_err(std::io::Error::other)?;

    std::io::copy(&mut sheet, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;
    Ok(())
}
