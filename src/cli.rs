use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sgear-mats-to-xlsx")]
#[command(version, about = "Beautify Silent Gear material dumps into a styled XLSX workbook")]
pub struct Cli {
    /// Tab-separated material dump to read
    #[arg(short, long, default_value = "material_export.tsv")]
    pub input: PathBuf,

    /// Directory to write the workbook into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// JSON view catalog replacing the built-in views
    #[arg(long)]
    pub views: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
