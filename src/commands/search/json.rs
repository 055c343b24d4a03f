use super::SearchReport;
use mazegraph_core::error::Result;

/// Output in JSON format
pub fn output_report(report: &SearchReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
