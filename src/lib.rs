//! Recording date extraction for raw DV files.
//!
//! Tape-sourced DV files carry the capture date and time of every frame in
//! SSYB subcode packets inside the frame header. The [ssyb] module decodes
//! the first frame's packets from the start of a file; [rename_to_clip]
//! renames a file to the convention iMovie '08 uses to recover capture
//! dates (`clip-2008-07-28 09;30;00.dv`); [CreationDateSetter] optionally
//! stamps the recording date into the file's creation date.

mod datetime;
mod metadata;
mod rename;
pub mod ssyb;

pub use datetime::RecordingDateTime;
pub use metadata::{CreationDateSetter, NoopSetter, SetFileTool};
pub use rename::{RenameError, rename_to_clip};
