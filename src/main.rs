use anyhow::{Context, bail};
use clap::Parser;
use dvdate::ssyb::{self, HEADER_LEN};
use dvdate::{CreationDateSetter, SetFileTool, rename_to_clip};
use log::debug;
use std::ffi::OsString;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const LONG_ABOUT: &str = "\
Gets the recording date and time of the first frame from raw DV files and \
prints one `<path>\\t<date>` line per file.

With --rename, each file is renamed to the clip naming convention iMovie '08 \
uses to recover capture dates (clip-2008-07-28 09;30;00.dv), and, when the \
macOS developer tools are installed, the file's creation date is set to the \
recording date. Only run the rename on a copy of a project's DV files; \
renaming the originals breaks the project.

Only the first frame is examined, so a corrupted first frame means the date \
cannot be read. Tested with PAL DV files imported from tape; NTSC should \
work as well.";

#[derive(Debug, Parser)]
#[command(version, about = "Gets the recording date and time of raw DV files", long_about = LONG_ABOUT)]
struct Options {
    /// Rename each file with its recording date and time as required by
    /// iMovie '08, and set its creation date when possible
    #[arg(long)]
    rename: bool,

    /// Raw DV files to examine
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() {
    env_logger::init();

    let options = Options::parse_from(normalized_args());

    if options.rename {
        println!("Renaming file(s) from, to:");
    }

    let setter = SetFileTool::new();
    for path in &options.files {
        // Nothing per-file aborts the batch or affects the exit status.
        if let Err(err) = examine_dv_file(path, options.rename, &setter) {
            eprintln!("{err:#}");
        }
    }
}

// The original release of this tool spelled the flag `-rename`; keep
// accepting that form.
fn normalized_args() -> impl Iterator<Item = OsString> {
    std::env::args_os().map(|arg| {
        if arg == "-rename" {
            OsString::from("--rename")
        } else {
            arg
        }
    })
}

fn examine_dv_file(
    path: &Path,
    rename: bool,
    setter: &impl CreationDateSetter,
) -> anyhow::Result<()> {
    if !path.exists() {
        bail!("File {} does not exist", path.display());
    }
    if path.is_dir() {
        bail!(
            "File {} is a directory: specify paths of single files or use *.dv",
            path.display()
        );
    }

    let header = read_header(path).with_context(|| format!("Cannot read {}", path.display()))?;
    let stamp = ssyb::decode_header(&header)
        .with_context(|| format!("Cannot parse the DV header of file {}", path.display()))?;
    debug!("{}: recorded {stamp}", path.display());

    if rename {
        let target = rename_to_clip(path, &stamp)
            .with_context(|| format!("Couldn't rename {}", path.display()))?;
        println!("{}\t{}", path.display(), stamp.clip_file_name());
        setter.set_creation_date(&target, &stamp);
    } else {
        println!("{}\t{stamp}", path.display());
    }

    Ok(())
}

// One read of up to HEADER_LEN bytes at offset 0; the decoder rejects a
// buffer cut short of the subcode packets.
fn read_header(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut header = vec![0u8; HEADER_LEN];
    let read = file.read(&mut header)?;
    header.truncate(read);
    Ok(header)
}
