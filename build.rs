use std::env;
use std::process::Command;

fn main() {
    const GIT_REVISION: &str = "GIT_REVISION";

    if env::var(GIT_REVISION).is_ok() {
        println!("cargo:warning=Environment variable {GIT_REVISION} is already set. Skipping.");
        return;
    }

    let revision = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env={GIT_REVISION}={revision}");
}
