use std::error::Error;
use std::path::PathBuf;

use bcs_fields::export_case;
use clap::Args;
use tracing::warn;

#[derive(Args, Debug)]
pub struct SynthArgs {
    /// YAML case configuration.
    #[arg(long)]
    pub case: PathBuf,
    /// Output directory for the exported fields.
    #[arg(long)]
    pub out: PathBuf,
    /// Optional YAML synthesis options.
    #[arg(long)]
    pub options: Option<PathBuf>,
}

pub fn run(args: &SynthArgs) -> Result<(), Box<dyn Error>> {
    let report = super::run_pass(&args.case, args.options.as_ref())?;
    let manifest = export_case(&report, &args.out)?;
    if !report.is_complete() {
        warn!(
            markers = manifest.markers.len(),
            failures = manifest.failures.len(),
            "case exported incomplete"
        );
    }
    println!("{}", manifest.digest);
    if report.failures.is_empty() {
        Ok(())
    } else {
        Err(format!("{} region or field builds failed", report.failures.len()).into())
    }
}
