use roundprobe::error::AppResult;
use roundprobe::runner::RunReport;

pub(crate) fn summary_lines(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.failure_count().saturating_add(5));
    lines.push(format!("Target: {}", report.target));
    lines.push(format!("Rounds: {}", report.rounds.len()));
    lines.push(format!("Observed: {}", report.observed_count()));
    lines.push(format!("Unobserved: {}", report.unobserved_count()));
    lines.push(format!("Failures: {}", report.failure_count()));
    for failure in report.failures() {
        lines.push(format!("  [round {}] {}", failure.round, failure.message));
    }
    lines
}

pub(crate) fn print_text_summary(report: &RunReport) {
    for line in summary_lines(report) {
        println!("{}", line);
    }
    if report.passed() {
        println!("Result: PASS");
    } else {
        println!("Result: FAIL");
    }
}

pub(crate) fn print_json_summary(report: &RunReport) -> AppResult<()> {
    let payload = serde_json::json!({
        "passed": report.passed(),
        "failures": report.failure_count(),
        "observed": report.observed_count(),
        "unobserved": report.unobserved_count(),
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
