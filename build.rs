fn main() {
    let desc = std::process::Command::new("git")
        .args(["describe", "--always", "--dirty", "--exclude", "*"])
        .output()
        .ok()
        .and_then(|r| String::from_utf8(r.stdout).ok())
        .map(|d| d.trim().to_owned())
        .filter(|d| !d.is_empty())
        .map(|d| format!(" {d}"))
        .unwrap_or_default();
    println!("cargo:rustc-env=POPULATOR_GIT_DESCRIPTION={desc}");
}
