//! Scaffold command implementation.

use crate::domain::{AppError, SettingsOverrides};

pub struct ScaffoldFlags {
    pub dry_run: bool,
    pub strict: bool,
}

pub fn run_scaffold(overrides: &SettingsOverrides, flags: ScaffoldFlags) -> Result<i32, AppError> {
    if flags.dry_run {
        let planned = crate::app::api::scaffold_plan_at(overrides, std::env::current_dir()?)?;
        for path in &planned {
            println!("+ {}", path.display());
        }
        println!("Would create {} zone directories", planned.len());
        return Ok(0);
    }

    let report = crate::app::api::scaffold(overrides)?;
    println!("{}", report.summary());

    if flags.strict && !report.is_complete() { Ok(1) } else { Ok(0) }
}
