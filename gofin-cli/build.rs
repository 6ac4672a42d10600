use std::process::Command;

/// Embeds the commit the binary was built from as `GOFIN_BUILD_SHA`.
///
/// Packagers building from a tarball (no `.git`) can set `GOFIN_BUILD_SHA`
/// themselves; otherwise git is asked and "unknown" is the last resort.
fn main() {
    println!("cargo:rerun-if-env-changed=GOFIN_BUILD_SHA");

    let workspace = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
    println!("cargo:rerun-if-changed={}", workspace.join(".git/HEAD").display());

    let sha = std::env::var("GOFIN_BUILD_SHA")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| git_short_sha(&workspace))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=GOFIN_BUILD_SHA={}", sha.trim());
}

fn git_short_sha(dir: &std::path::Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8(out.stdout).ok()?.trim().to_string();
    (!sha.is_empty()).then_some(sha)
}
