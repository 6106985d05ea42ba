// Fri Oct 16 2026 - Alex

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "layout-inspector")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Probes live instances to show how types are laid out in memory", long_about = None)]
pub struct Args {
    /// Catalog types to inspect
    pub types: Vec<String>,

    /// List the catalog and exit
    #[arg(long)]
    pub list: bool,

    /// Do not expand nested value types
    #[arg(long)]
    pub flat: bool,

    /// Emit layouts as JSON instead of diagrams
    #[arg(long)]
    pub json: bool,

    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if !self.list && self.types.is_empty() {
            return Err("Name at least one type, or pass --list".to_string());
        }
        Ok(())
    }
}
