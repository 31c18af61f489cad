use clap::Parser;
use std::path::PathBuf;

/// Resonance Desk - the studio front-of-house companion 🎙️
#[derive(Parser, Debug)]
#[command(name = "resonance-desk", version, about)]
pub struct Args {
    /// Directory holding the demo reels (overrides config)
    #[arg(long)]
    pub audio_dir: Option<PathBuf>,

    /// Run without an audio device (visuals only)
    #[arg(long, short = 'M')]
    pub muted: bool,

    /// Print a default config.toml to stdout and exit
    #[arg(long)]
    pub generate_config: bool,
}
