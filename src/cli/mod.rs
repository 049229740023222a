// CLI module for wiki2brief
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// wiki2brief - Wikipedia summarizer hub backed by the Mistral AI chat API
#[derive(Parser, Debug)]
#[command(name = "wiki2brief", version, about, long_about = None)]
pub struct Args {
    /// Path to an alternate configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
