use crate::domain::model::Report;
use crate::domain::ports::ReportSink;
use crate::utils::error::EtlError;

/// Prints the end-of-run summary to stdout and fatal notices to stderr.
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn emit_report(&self, report: &Report) {
        println!("\n===== IMPORT REPORT =====");
        println!("Total records processed: {}", report.total_records);
        println!("Total batches: {}", report.total_batches);
        println!("Successful batches: {}", report.successful);
        println!("Failed batches: {}", report.failed);

        if report.failed > 0 {
            println!("\nFailed batch details:");
            for outcome in report.failures() {
                println!(
                    "- Batch {}: {}",
                    outcome.batch,
                    outcome.message.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    fn emit_fatal(&self, error: &EtlError) {
        eprintln!("Import run aborted: {}", error);
    }
}
