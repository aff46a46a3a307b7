use std::process::{Command, Stdio};

fn geargen(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_geargen"))
        .args(args)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::null())
        .output()
        .expect("run geargen")
}

#[test]
#[cfg(feature = "svg-io")]
fn bad_number_warns_and_uses_default() {
    let out = geargen(&["-c", "abc"]);
    assert!(out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("WARN"));
    assert!(stderr.contains("center distance"));
    // redirected stderr gets no colour escapes
    assert!(!stderr.contains('\u{1b}'));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("viewBox=\"0 0 224000 177000\""));
}

#[test]
fn invalid_pair_exits_with_failure() {
    let out = geargen(&["--n1", "1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid gear parameters"));
}
