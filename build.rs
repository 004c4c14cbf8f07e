//! Build script for Notepad.
//!
//! Captures the build date shown in the About dialog.

use std::process::Command;

fn main() {
    let build_date = get_build_date();
    println!("cargo:rustc-env=NOTEPAD_BUILD_DATE={build_date}");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
}

/// Get the build date in YYYY-MM-DD format.
fn get_build_date() -> String {
    // Unix date command (macOS, Linux)
    run_for_stdout("date", &["+%Y-%m-%d"])
        // Windows
        .or_else(|| run_for_stdout("powershell", &["-Command", "Get-Date -Format 'yyyy-MM-dd'"]))
        .unwrap_or_else(|| "unknown".to_string())
}

fn run_for_stdout(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
