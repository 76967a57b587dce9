//! Scripted onboarding sessions
//!
//! A script is a JSON array of actions, e.g.
//! `[{"set": {"field": "email", "value": "anna@example.de"}}, "next", "complete"]`.
//! Rejected actions are reported and the script carries on, the way a user
//! would correct the form and try again.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use onboarding::{FlowStatus, LocalStorageSink, LoggingNavigator, Navigator, Onboarding, OnboardingError, ProfileSink};
use serde::Deserialize;
use serde_json::Value;
use shared::{component_info, component_warn, AppConfig, Component};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptAction {
    Set { field: String, value: Value },
    Next,
    Previous,
    Skip,
    Complete,
    Enter,
}

impl fmt::Display for ScriptAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptAction::Set { field, value } => write!(f, "set {field}={}", raw_value(value)),
            ScriptAction::Next => write!(f, "next"),
            ScriptAction::Previous => write!(f, "previous"),
            ScriptAction::Skip => write!(f, "skip"),
            ScriptAction::Complete => write!(f, "complete"),
            ScriptAction::Enter => write!(f, "enter"),
        }
    }
}

/// Boundary string for a JSON value; arrays become comma-separated lists
fn raw_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(values) => values.iter().map(raw_value).collect::<Vec<_>>().join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn parse_script(json: &str) -> anyhow::Result<Vec<ScriptAction>> {
    serde_json::from_str(json).context("Onboarding script must be a JSON array of actions")
}

/// Outcome of a scripted session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptReport {
    pub applied: usize,
    pub rejected: usize,
    pub status: FlowStatus,
}

/// Apply one action; the inner result carries a rejection by the flow
fn apply<S, N>(
    flow: &mut Onboarding<S, N>,
    action: &ScriptAction,
    out: &mut dyn Write,
) -> anyhow::Result<Result<(), OnboardingError>>
where
    S: ProfileSink,
    N: Navigator,
{
    match action {
        ScriptAction::Set { field, value } => return Ok(flow.set(field, &raw_value(value))),
        ScriptAction::Next => match flow.next() {
            Ok(step) => writeln!(out, "→ Schritt {step}")?,
            Err(e) => return Ok(Err(e)),
        },
        ScriptAction::Previous => match flow.previous() {
            Ok(step) => writeln!(out, "← Schritt {step}")?,
            Err(e) => return Ok(Err(e)),
        },
        ScriptAction::Skip => return Ok(flow.skip()),
        ScriptAction::Complete => {
            let profile_id = match flow.complete() {
                Ok(profile) => profile.profile_id,
                Err(e) => return Ok(Err(e)),
            };
            writeln!(out, "Profil {profile_id} gespeichert")?;
            writeln!(out, "{}", flow.welcome_summary()?)?;
        }
        ScriptAction::Enter => return Ok(flow.enter_app()),
    }
    Ok(Ok(()))
}

/// Drive `flow` through `actions`, reporting each rejection to `out`
pub fn run_actions<S, N>(
    flow: &mut Onboarding<S, N>,
    actions: &[ScriptAction],
    out: &mut dyn Write,
) -> anyhow::Result<ScriptReport>
where
    S: ProfileSink,
    N: Navigator,
{
    let mut report = ScriptReport {
        applied: 0,
        rejected: 0,
        status: flow.status(),
    };

    for action in actions {
        match apply(flow, action, out)? {
            Ok(()) => report.applied += 1,
            Err(e) => {
                report.rejected += 1;
                component_warn!(Component::Cli, action = %action, error = %e, "Onboarding action rejected");
                writeln!(out, "✗ {action}: {e}")?;
            }
        }
    }

    report.status = flow.status();
    Ok(report)
}

pub fn run_file(config: &AppConfig, script: &Path, out: &mut dyn Write) -> anyhow::Result<()> {
    let json = fs::read_to_string(script)
        .with_context(|| format!("Failed to read onboarding script {}", script.display()))?;
    let actions = parse_script(&json)?;

    let sink = LocalStorageSink::new(&config.storage_dir);
    let mut flow = Onboarding::new(sink, LoggingNavigator::new());
    let report = run_actions(&mut flow, &actions, out)?;

    component_info!(
        Component::Cli,
        applied = report.applied,
        rejected = report.rejected,
        status = ?report.status,
        "Onboarding script finished"
    );
    writeln!(
        out,
        "Status: {:?} bei Schritt {} ({} ausgeführt, {} abgelehnt)",
        report.status,
        flow.current_step(),
        report.applied,
        report.rejected
    )?;
    for route in flow.navigator().visited() {
        writeln!(out, "Navigation: {}", route.path())?;
    }
    Ok(())
}
