//! Locate command implementation.

use crate::domain::{AppError, SettingsOverrides};

pub fn run_locate(overrides: &SettingsOverrides, code: &str) -> Result<i32, AppError> {
    let code = code.trim();
    match crate::app::api::locate(overrides, code)? {
        Some(located) => {
            if located.files.is_empty() {
                eprintln!("{} has no layout images", located.directory);
            }
            for file in &located.files {
                println!("{}", file);
            }
            Ok(0)
        }
        None => {
            eprintln!("No layout directory for {}", code);
            Ok(1)
        }
    }
}
