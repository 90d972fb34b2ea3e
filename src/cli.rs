use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dupe_video_cleaner")]
#[command(about = "Find duplicate video files by size and content hash, and delete them interactively", long_about = None)]
pub struct Cli {
    /// Directory to scan (prompted for when omitted)
    pub directory: Option<PathBuf>,

    /// Only scan these extensions, e.g. `--ext mp4 --ext mkv`
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,
}
