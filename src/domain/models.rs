use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One external engine invocation: program, argv and any extra child env.
#[derive(Debug, Clone, Serialize)]
pub struct EngineInvocation {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl EngineInvocation {
    /// Shell-like rendering for plan rows and failure messages.
    pub fn rendered(&self) -> String {
        let mut parts = Vec::with_capacity(self.env.len() + 1 + self.args.len());
        for (k, v) in &self.env {
            parts.push(format!("{}={}", k, v));
        }
        parts.push(self.program.clone());
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub name: String,
    pub command: String,
    pub status: String,
    pub exit_code: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub overall: String,
    pub exit_code: i32,
    pub steps: Vec<StepReport>,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct DoctorReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}
