//! Stamps the binary with a source revision for `arus --version`.
//!
//! `ARUS_BUILD_SHA` in the environment wins (release tarballs have no `.git`);
//! otherwise `git describe` is asked, falling back to "unknown".

use std::env;
use std::path::Path;
use std::process::Command;

fn describe_revision(workspace: &Path) -> Option<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_owned())
}

fn main() {
    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR").unwrap_or_else(|| ".".into());
    let workspace = Path::new(&manifest_dir).join("..");

    let revision = env::var("ARUS_BUILD_SHA")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| describe_revision(&workspace))
        .unwrap_or_else(|| "unknown".to_owned());

    println!("cargo:rustc-env=ARUS_BUILD_SHA={revision}");
    println!("cargo:rerun-if-env-changed=ARUS_BUILD_SHA");
    println!("cargo:rerun-if-changed=build.rs");
    if workspace.join(".git/HEAD").exists() {
        println!("cargo:rerun-if-changed={}", workspace.join(".git/HEAD").display());
    }
}
