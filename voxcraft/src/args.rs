use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// VoxCraft speech and script generation server
#[derive(Debug, Parser)]
#[command(name = "voxcraft", about = "Voice-parameter resolution, speech synthesis and TTS script generation")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "voxcraft.toml", env = "VOXCRAFT_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "VOXCRAFT_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Log filter directives (e.g. `info,tts=debug`)
    #[arg(long, default_value = "info", env = "VOXCRAFT_LOG")]
    pub log_filter: String,
}
