use std::process::Command;

// Ask git for a revision, falling back to "unknown" outside a checkout.
fn git_rev(args: &[&str]) -> String {
    match Command::new("git").args(args).output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // short hash shows up in `wordsense --version`
    println!("cargo:rustc-env=GIT_HASH={}", git_rev(&["rev-parse", "--short", "HEAD"]));
    println!("cargo:rustc-env=GIT_HASH_FULL={}", git_rev(&["rev-parse", "HEAD"]));

    println!("cargo:rerun-if-changed=.git/HEAD");
}
