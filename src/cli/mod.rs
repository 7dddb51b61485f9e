// CLI module for gensen-extract

use clap::Parser;

/// gensen-extract - Gemini-backed 源泉徴収票 field extraction service
#[derive(Parser, Debug)]
#[command(name = "gensen-extract", version, about, long_about = None)]
pub struct Args {
    /// Override the configured bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured bind port
    #[arg(long)]
    pub port: Option<u16>,
}
