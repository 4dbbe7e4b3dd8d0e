use crate::RecordingDateTime;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Sets a file's creation date to its recording date.
///
/// Implementations are best-effort: by the time this runs the recording
/// date is already in the file name, so a failed attempt is cosmetic and
/// must be swallowed without any diagnostic.
pub trait CreationDateSetter {
    fn set_creation_date(&self, path: &Path, stamp: &RecordingDateTime);
}

/// Runs `SetFile -d` from the macOS developer tools.
///
/// The developer tools are an optional install, so the tool may well be
/// missing; that spawn error is ignored like every other failure mode.
pub struct SetFileTool {
    tool: PathBuf,
}

impl SetFileTool {
    pub fn new() -> Self {
        Self {
            tool: PathBuf::from("/Developer/Tools/SetFile"),
        }
    }
}

impl Default for SetFileTool {
    fn default() -> Self {
        Self::new()
    }
}

impl CreationDateSetter for SetFileTool {
    fn set_creation_date(&self, path: &Path, stamp: &RecordingDateTime) {
        let Some(name) = path.file_name() else {
            return;
        };

        let mut command = Command::new(&self.tool);
        command.arg("-d").arg(stamp.set_file_argument()).arg(name);
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            command.current_dir(dir);
        }

        debug!("setting creation date: {command:?}");
        let _ = command.status();
    }
}

/// Leaves file metadata alone.
pub struct NoopSetter;

impl CreationDateSetter for NoopSetter {
    fn set_creation_date(&self, _path: &Path, _stamp: &RecordingDateTime) {}
}
