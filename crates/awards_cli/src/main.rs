//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `awards_core` wiring end to end: config, logging, store, wizard.
//! - Print a deterministic summary followed by the store snapshot as JSON.

use awards_core::{
    admin_overview, core_version, init_logging, AwardsConfig, NominationWizard, User, UserRole,
    WizardAction,
};
use std::io::ErrorKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = allow_missing_env_file(dotenvy::dotenv()) {
        eprintln!("env file error: {err}");
        return ExitCode::FAILURE;
    }

    let config = match AwardsConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(config.log_level, dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut store = match config.build_store() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("store error: {err}");
            return ExitCode::FAILURE;
        }
    };
    store.set_role(UserRole::Manager);
    store.set_user(User::new(
        "cli",
        "CLI Manager",
        UserRole::Manager,
        "cli@example.invalid",
    ));

    println!("awards_core version={}", core_version());
    println!("delete_policy={}", store.delete_policy());

    if let Some(category_id) = store.active_categories().first().map(|c| c.id.clone()) {
        let mut wizard = NominationWizard::new();
        let steps = [
            WizardAction::SetNomineeId("EMP100".to_string()),
            WizardAction::SetNomineeName("Smoke Test".to_string()),
            WizardAction::Next,
            WizardAction::SelectCategory(category_id),
            WizardAction::SetJustification("CLI smoke nomination".to_string()),
            WizardAction::Next,
            WizardAction::Submit,
        ];
        for action in steps {
            if let Err(err) = wizard.apply(action, &mut store) {
                eprintln!("wizard error: {err}");
                return ExitCode::FAILURE;
            }
        }
        if let Some(reference_id) = wizard.reference_id() {
            println!("submitted reference_id={reference_id}");
        }
    }

    let overview = admin_overview(&store);
    println!(
        "categories={} active={} nominations={} pending={}",
        overview.total_categories,
        overview.active_categories,
        overview.total_nominations,
        overview.pending_nominations
    );

    match serde_json::to_string_pretty(&store.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("event=snapshot_encode module=cli status=error");
            eprintln!("snapshot error: {err}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// A missing `.env` file is the normal case; anything else is reported.
fn allow_missing_env_file<T>(loaded: Result<T, dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match loaded {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::allow_missing_env_file;

    #[test]
    fn missing_env_file_is_ignored() {
        let dir = tempfile::tempdir().expect("temp dir");
        let loaded = dotenvy::from_path(dir.path().join(".env"));
        assert!(allow_missing_env_file(loaded).is_ok());
    }

    #[test]
    fn malformed_env_file_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(".env");
        std::fs::write(&path, "MALFORMED LINE\n").expect("write env file");

        let err = allow_missing_env_file(dotenvy::from_path(&path)).expect_err("parse error");
        assert!(matches!(err, dotenvy::Error::LineParse(..)));
    }
}
