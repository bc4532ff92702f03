use crate::domain::models::{CheckItem, DoctorReport};
use crate::services::sequence::DEMO_JOB_INI;
use std::path::{Path, PathBuf};

fn check_exists(name: &str, path: PathBuf) -> CheckItem {
    CheckItem {
        name: name.to_string(),
        status: if path.exists() { "ok" } else { "missing" }.to_string(),
    }
}

pub fn preflight(engine: &str, checkout_root: &Path) -> DoctorReport {
    let checks = vec![
        CheckItem {
            name: "engine_available".to_string(),
            status: if std::process::Command::new(engine)
                .arg("--version")
                .output()
                .map(|o| o.status.success())
                .unwrap_or(false)
            {
                "ok"
            } else {
                "missing"
            }
            .to_string(),
        },
        check_exists("checkout_root", checkout_root.to_path_buf()),
        check_exists("demo_job_ini", checkout_root.join(DEMO_JOB_INI)),
    ];

    let overall = if checks.iter().all(|c| c.status == "ok") {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();

    DoctorReport { overall, checks }
}
