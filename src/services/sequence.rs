use crate::domain::models::EngineInvocation;
use std::path::Path;

/// Demo job configuration, relative to the checkout root.
pub const DEMO_JOB_INI: &str = "demos/hazard/AreaSourceClassicalPSHA/job.ini";

/// Forces the engine's plotting backend into non-interactive file output.
/// Only the two plot invocations carry it.
pub const PLOT_BACKEND_ENV: &str = "MPLBACKEND";
pub const PLOT_BACKEND: &str = "Agg";

/// The smoke sequence. Order is part of the contract: a queued job can only
/// be re-run after one was submitted, and the plot steps read the latest
/// completed analysis (engine index -1).
pub fn smoke_sequence(engine: &str, checkout_root: &Path) -> Vec<EngineInvocation> {
    let job_ini = checkout_root.join(DEMO_JOB_INI);
    let plot_env = vec![(PLOT_BACKEND_ENV.to_string(), PLOT_BACKEND.to_string())];

    vec![
        EngineInvocation {
            name: "run-job".to_string(),
            program: engine.to_string(),
            args: vec![
                "engine".to_string(),
                "--run".to_string(),
                job_ini.to_string_lossy().to_string(),
            ],
            env: vec![],
        },
        EngineInvocation {
            name: "run-queued".to_string(),
            program: engine.to_string(),
            args: vec!["engine".to_string(), "--lhc".to_string()],
            env: vec![],
        },
        EngineInvocation {
            name: "plot-latest".to_string(),
            program: engine.to_string(),
            args: vec!["plot".to_string(), "-1".to_string()],
            env: plot_env.clone(),
        },
        EngineInvocation {
            name: "plot-uhs-latest".to_string(),
            program: engine.to_string(),
            args: vec!["plot_uhs".to_string(), "-1".to_string()],
            env: plot_env,
        },
    ]
}
