use assert_cmd::Command;
use device_va_edit::domain::{EditContext, EligibleDevice, Step, TargetVa, VaChild, VaRecord};
use device_va_edit::wizard::{ActionLog, NavigationLog, WizardController};
use once_cell::sync::Lazy;
use tempfile::TempDir;

pub type TestController = WizardController<ActionLog, NavigationLog>;

/// Steps as the store loads them for the edit flow.
pub static STEPS: Lazy<Vec<Step>> = Lazy::new(|| {
    vec![
        Step::new(1, "step1.label"),
        Step::new(2, "step2.label"),
        Step::new(3, "step3.label"),
    ]
});

/// Snapshot where every guard on the selection step passes.
#[allow(dead_code)]
pub fn ready_context(step: i64) -> EditContext {
    EditContext {
        current_step: step,
        current_account_id: Some("test-sa-id".into()),
        account_id_list: vec!["va1".into(), "va2".into()],
        total_selected_devices: 5,
        total_selected_devices_with_licenses: 3,
        total_accounts_selected: 2,
        steps: STEPS.clone(),
        current_va_data: vec![va_record(&[Some(&["target-va-id"][..]), Some(&[][..])])],
        target_va_selection: Some(TargetVa {
            va_id: "target-va-id".into(),
        }),
        eligible_devices_from_step1: vec![EligibleDevice {
            id: "device1".into(),
        }],
        ..EditContext::default()
    }
}

#[allow(dead_code)]
pub fn va_record(targets: &[Option<&[&str]>]) -> VaRecord {
    VaRecord {
        id: None,
        children: targets
            .iter()
            .map(|target| VaChild {
                id: None,
                target_va: target.map(|ids| ids.iter().map(|id| id.to_string()).collect()),
            })
            .collect(),
    }
}

#[allow(dead_code)]
pub fn mount(context: &EditContext) -> TestController {
    WizardController::mount(context, ActionLog::new(), NavigationLog::new())
}

pub struct CliOutput {
    pub stdout: String,
    #[allow(dead_code)]
    pub stderr: String,
}

/// Runs `va_edit_cli` in script mode against an isolated config home.
#[allow(dead_code)]
pub struct CliHarness {
    home: TempDir,
}

#[allow(dead_code)]
impl CliHarness {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn home(&self) -> &std::path::Path {
        self.home.path()
    }

    pub fn run_script(&self, script: &str) -> CliOutput {
        let mut cmd = Command::cargo_bin("va_edit_cli").expect("binary exists");
        cmd.env("VA_EDIT_HOME", self.home())
            .env("VA_EDIT_CLI_SCRIPT", "1")
            .env_remove("RUST_LOG")
            .write_stdin(script.to_string());
        let output = cmd.output().expect("run script CLI");
        if !output.status.success() {
            panic!(
                "script CLI failed: status={}\nstdout:\n{}\nstderr:\n{}",
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        CliOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
