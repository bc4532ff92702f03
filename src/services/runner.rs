use crate::domain::models::{EngineInvocation, RunReport, StepReport};
use crate::services::storage::audit;
use std::process::Command;
use std::time::{Duration, Instant};

/// Shell convention for "command not found".
pub const EXIT_SPAWN_FAILED: i32 = 127;
/// timeout(1) convention for a killed, overdue child.
pub const EXIT_TIMEOUT: i32 = 124;

/// Exit status when the child died without a code (killed by a signal).
const EXIT_SIGNALED: i32 = 1;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the invocations in order, stopping at the first failure. Child stdio
/// is inherited so engine output streams through to the CI log. Steps after
/// the failing one are reported as skipped and never launched.
pub fn run_sequence(invocations: &[EngineInvocation], timeout: Option<Duration>) -> RunReport {
    let mut steps = Vec::with_capacity(invocations.len());
    let mut failure: Option<i32> = None;

    for (i, inv) in invocations.iter().enumerate() {
        if failure.is_some() {
            steps.push(StepReport {
                step: i + 1,
                name: inv.name.clone(),
                command: inv.rendered(),
                status: "skipped".to_string(),
                exit_code: None,
            });
            continue;
        }

        let (status, exit_code) = run_step(inv, timeout);
        audit(
            "smoke_step",
            serde_json::json!({
                "step": i + 1,
                "name": inv.name,
                "command": inv.rendered(),
                "status": status,
                "exit_code": exit_code,
            }),
        );
        if exit_code != 0 {
            failure = Some(exit_code);
        }
        steps.push(StepReport {
            step: i + 1,
            name: inv.name.clone(),
            command: inv.rendered(),
            status,
            exit_code: Some(exit_code),
        });
    }

    let exit_code = failure.unwrap_or(0);
    let overall = if exit_code == 0 { "ok" } else { "failed" }.to_string();
    audit(
        "smoke_run",
        serde_json::json!({ "overall": overall, "exit_code": exit_code }),
    );

    RunReport {
        overall,
        exit_code,
        steps,
    }
}

fn run_step(inv: &EngineInvocation, timeout: Option<Duration>) -> (String, i32) {
    let mut cmd = Command::new(&inv.program);
    cmd.args(&inv.args);
    for (k, v) in &inv.env {
        cmd.env(k, v);
    }

    match timeout {
        None => match cmd.status() {
            Ok(status) if status.success() => ("ok".to_string(), 0),
            Ok(status) => ("failed".to_string(), status.code().unwrap_or(EXIT_SIGNALED)),
            Err(_) => ("spawn_failed".to_string(), EXIT_SPAWN_FAILED),
        },
        Some(limit) => run_step_with_timeout(cmd, limit),
    }
}

fn run_step_with_timeout(mut cmd: Command, limit: Duration) -> (String, i32) {
    let mut child = match cmd.spawn() {
        Ok(c) => c,
        Err(_) => return ("spawn_failed".to_string(), EXIT_SPAWN_FAILED),
    };

    let deadline = Instant::now() + limit;
    loop {
        match child.try_wait() {
            Ok(Some(status)) if status.success() => return ("ok".to_string(), 0),
            Ok(Some(status)) => {
                return (
                    "failed".to_string(),
                    status.code().unwrap_or(EXIT_SIGNALED),
                )
            }
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return ("timeout".to_string(), EXIT_TIMEOUT);
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(_) => {
                let _ = child.kill();
                let _ = child.wait();
                return ("failed".to_string(), EXIT_SIGNALED);
            }
        }
    }
}
