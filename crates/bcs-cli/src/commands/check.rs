use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde_json::json;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// YAML case configuration.
    #[arg(long)]
    pub case: PathBuf,
    /// Optional YAML synthesis options.
    #[arg(long)]
    pub options: Option<PathBuf>,
}

pub fn run(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let report = super::run_pass(&args.case, args.options.as_ref())?;
    let complete = report.is_complete();
    let regions: Vec<_> = report
        .fields
        .regions
        .iter()
        .map(|(name, region)| {
            json!({
                "region": name,
                "fields": region.fields.keys().collect::<Vec<_>>(),
            })
        })
        .collect();
    let summary = json!({
        "digest": report.fields.digest()?,
        "complete": complete,
        "regions": regions,
        "markers": report.markers(),
        "failures": &report.failures,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    if complete {
        Ok(())
    } else {
        Err("case is not ready for the solver".into())
    }
}
