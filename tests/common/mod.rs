use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment for one test: its own HOME, a fixture checkout tree
/// holding the demo job configuration, and a fake engine executable whose
/// per-invocation exit codes are driven by control files.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub checkout: PathBuf,
    pub engine: PathBuf,
    log: PathBuf,
    ctrl: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let checkout = make_fixture_checkout(tmp.path());

        let log = tmp.path().join("engine.log");
        let ctrl = tmp.path().join("ctrl");
        fs::create_dir_all(&ctrl).expect("create control dir");
        let engine = write_fake_engine(tmp.path(), &log, &ctrl);

        Self {
            _tmp: tmp,
            home,
            checkout,
            engine,
            log,
            ctrl,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--engine").arg(&self.engine);
        cmd
    }

    /// Like `cmd` but without the fixture engine, for tests that point the
    /// runner at a different executable.
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("oq-smoke");
        cmd.env("HOME", &self.home).env_remove("OQ_CHECKOUT_ROOT");
        cmd
    }

    pub fn run_args(&self) -> Vec<String> {
        vec![
            "run".to_string(),
            "--checkout-root".to_string(),
            self.checkout.to_string_lossy().to_string(),
        ]
    }

    /// Make the fake engine exit with `code` for the given step key
    /// (run_job, run_queued, plot, plot_uhs, version).
    pub fn fail_step(&self, key: &str, code: i32) {
        fs::write(self.ctrl.join(format!("{key}.exit")), code.to_string())
            .expect("write exit control");
    }

    /// Make the fake engine sleep before exiting for the given step key.
    pub fn stall_step(&self, key: &str, secs: u64) {
        fs::write(self.ctrl.join(format!("{key}.sleep")), secs.to_string())
            .expect("write sleep control");
    }

    /// Make the fake engine die from SIGKILL for the given step key, so the
    /// child terminates without an exit code.
    pub fn kill_step(&self, key: &str) {
        fs::write(self.ctrl.join(format!("{key}.kill")), "").expect("write kill control");
    }

    /// One line per engine invocation, in invocation order.
    pub fn engine_log(&self) -> Vec<String> {
        if !self.log.exists() {
            return Vec::new();
        }
        fs::read_to_string(&self.log)
            .expect("read engine log")
            .lines()
            .map(|l| l.to_string())
            .collect()
    }
}

fn make_fixture_checkout(base: &std::path::Path) -> PathBuf {
    let checkout = base.join("checkout");
    let demo = checkout.join("demos/hazard/AreaSourceClassicalPSHA");
    fs::create_dir_all(&demo).expect("create demo dir");
    fs::write(
        demo.join("job.ini"),
        "[general]\ncalculation_mode = classical\n",
    )
    .expect("write demo job.ini");
    checkout
}

fn write_fake_engine(base: &std::path::Path, log: &PathBuf, ctrl: &PathBuf) -> PathBuf {
    let bin = base.join("bin");
    fs::create_dir_all(&bin).expect("create bin dir");
    let path = bin.join("fake-openquake");

    let script = format!(
        r#"#!/usr/bin/env sh
log='{log}'
ctrl='{ctrl}'
echo "argv=$* mpl=${{MPLBACKEND:-unset}}" >> "$log"
case "$*" in
  "engine --run "*) key=run_job ;;
  "engine --lhc") key=run_queued ;;
  "plot -1") key=plot ;;
  "plot_uhs -1") key=plot_uhs ;;
  "--version") key=version ;;
  *) key=other ;;
esac
if [ -f "$ctrl/$key.sleep" ]; then sleep "$(cat "$ctrl/$key.sleep")"; fi
if [ -f "$ctrl/$key.kill" ]; then kill -KILL $$; fi
if [ -f "$ctrl/$key.exit" ]; then exit "$(cat "$ctrl/$key.exit")"; fi
exit 0
"#,
        log = log.display(),
        ctrl = ctrl.display()
    );
    fs::write(&path, script).expect("write fake engine");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).expect("engine metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("mark engine executable");
    }

    path
}
