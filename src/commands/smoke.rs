use crate::domain::models::JsonOut;
use crate::services::doctor::preflight;
use crate::services::output::{print_one, print_out};
use crate::services::runner::run_sequence;
use crate::services::sequence::smoke_sequence;
use std::path::Path;
use std::time::Duration;

/// Execute the smoke sequence and report. Returns the process exit code:
/// 0 when every invocation succeeded, otherwise the first failure's status.
pub fn handle_run(
    json: bool,
    engine: &str,
    checkout_root: &Path,
    timeout: Option<u64>,
) -> anyhow::Result<i32> {
    let invocations = smoke_sequence(engine, checkout_root);
    let report = run_sequence(&invocations, timeout.map(Duration::from_secs));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: report.exit_code == 0,
                data: &report
            })?
        );
    } else {
        for s in &report.steps {
            println!(
                "{}\t{}\t{}\t{}",
                s.step,
                s.name,
                s.status,
                s.exit_code.map(|c| c.to_string()).unwrap_or_default()
            );
        }
        match report.steps.iter().find(|s| s.status != "ok" && s.status != "skipped") {
            Some(failed) => println!(
                "smoke failed: step {} ({}) exited {}",
                failed.step,
                failed.name,
                report.exit_code
            ),
            None => println!("smoke ok"),
        }
    }

    Ok(report.exit_code)
}

pub fn handle_plan(json: bool, engine: &str, checkout_root: &Path) -> anyhow::Result<()> {
    let invocations = smoke_sequence(engine, checkout_root);
    print_out(json, &invocations, |inv| {
        format!("{}\t{}", inv.name, inv.rendered())
    })
}

/// Returns 1 when any check fails so CI can gate on `doctor` directly.
pub fn handle_doctor(json: bool, engine: &str, checkout_root: &Path) -> anyhow::Result<i32> {
    let report = preflight(engine, checkout_root);
    let ok = report.overall == "ok";
    print_one(json, ok, report, |r| {
        let mut lines: Vec<String> = r
            .checks
            .iter()
            .map(|c| format!("{}\t{}", c.name, c.status))
            .collect();
        lines.push(format!("overall: {}", r.overall));
        lines.join("\n")
    })?;
    Ok(if ok { 0 } else { 1 })
}
