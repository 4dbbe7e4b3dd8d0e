use crate::RecordingDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("target file {} already exists", .0.display())]
    TargetExists(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Renames `path` to the iMovie '08 clip name for `stamp`, keeping it in
/// the same directory, and returns the new path.
///
/// Two clips recorded within the same second produce the same target name.
/// The second rename must fail rather than replace the first clip, and
/// `fs::rename` replaces existing targets on Unix, so an existing target is
/// rejected up front.
pub fn rename_to_clip(path: &Path, stamp: &RecordingDateTime) -> Result<PathBuf, RenameError> {
    let target = match path.parent() {
        Some(dir) => dir.join(stamp.clip_file_name()),
        None => PathBuf::from(stamp.clip_file_name()),
    };

    if target.exists() {
        return Err(RenameError::TargetExists(target));
    }
    fs::rename(path, &target)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAMP: RecordingDateTime = RecordingDateTime {
        year: 2008,
        month: 7,
        day: 28,
        hour: 9,
        minute: 30,
        second: 0,
    };

    #[test]
    fn renaming_moves_the_file_within_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.dv");
        fs::write(&source, b"dv").unwrap();

        let target = rename_to_clip(&source, &STAMP).unwrap();

        assert_eq!(target, dir.path().join("clip-2008-07-28 09;30;00.dv"));
        assert!(!source.exists());
        assert!(target.exists());
    }

    #[test]
    fn renaming_refuses_to_replace_an_existing_clip() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.dv");
        let second = dir.path().join("second.dv");
        fs::write(&first, b"one").unwrap();
        fs::write(&second, b"two").unwrap();

        rename_to_clip(&first, &STAMP).unwrap();
        let err = rename_to_clip(&second, &STAMP).unwrap_err();

        assert!(matches!(err, RenameError::TargetExists(_)));
        assert!(second.exists());
        let kept = dir.path().join("clip-2008-07-28 09;30;00.dv");
        assert_eq!(fs::read(kept).unwrap(), b"one");
    }

    #[test]
    fn renaming_a_missing_source_reports_the_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = rename_to_clip(&dir.path().join("missing.dv"), &STAMP).unwrap_err();
        assert!(matches!(err, RenameError::Io(_)));
    }
}
