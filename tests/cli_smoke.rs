use std::path::PathBuf;

fn bin_path() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_orbital-hud")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "orbital-hud.exe"
            } else {
                "orbital-hud"
            });
            p
        })
}

#[test]
fn cli_render_writes_png() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let out_path = dir.join("hud.png");
    let ledger_path = dir.join("render_ledger.json");
    let _ = std::fs::remove_file(&out_path);
    let _ = std::fs::remove_file(&ledger_path);

    let status = std::process::Command::new(bin_path())
        .args([
            "render",
            "--out",
            out_path.to_string_lossy().as_ref(),
            "--ledger",
            ledger_path.to_string_lossy().as_ref(),
            "--dark",
            "--battery",
            "0.8",
            "--now",
            "2025-06-15T12:00:00",
        ])
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out_path.exists());
    // The render initialized the ledger for the day.
    assert!(ledger_path.exists());
}

#[test]
fn cli_log_accumulates_within_a_day() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let ledger_path = dir.join("log_ledger.json");
    let _ = std::fs::remove_file(&ledger_path);
    let ledger_arg = ledger_path.to_string_lossy().to_string();

    let out = std::process::Command::new(bin_path())
        .args(["log", "--hours", "1h", "--ledger", ledger_arg.as_str()])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("1.0h"));

    let out = std::process::Command::new(bin_path())
        .args(["log", "--hours", "30m", "--ledger", ledger_arg.as_str()])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("1.5h"));

    let out = std::process::Command::new(bin_path())
        .args(["show", "--ledger", ledger_arg.as_str()])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("1.5h"));
}
