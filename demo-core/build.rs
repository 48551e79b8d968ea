use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout).ok().map(|s| s.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    if let Some(describe) = git(&["describe", "--tags", "--always", "--dirty"]) {
        println!("cargo:rustc-env=DEMO_GIT_DESCRIBE={describe}");
    }
    if let Some(short) = git(&["rev-parse", "--short=9", "HEAD"]) {
        println!("cargo:rustc-env=DEMO_GIT_HASH={short}");
    }
}
