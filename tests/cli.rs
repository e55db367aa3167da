use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glyph_tiles"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn glyph_tiles")
}

#[test]
fn bad_invocations_print_usage_and_do_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let cases: [&[&str]; 3] = [&[], &["build"], &["gen", "clean"]];
    for args in cases {
        let out = run(tmp.path(), args);
        assert!(out.status.success(), "args {args:?} should not fail");
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("Usage: either gen or clean"), "args {args:?}: {stdout}");
    }
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn clean_on_empty_dir_is_silent() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run(tmp.path(), &["clean", "--variant", "minimal"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn gen_with_missing_font_fails_without_output() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("cfg.ron"), r#"(variant: Minimal, font_path: "nope/missing.ttf")"#).unwrap();
    let out = run(tmp.path(), &["gen", "--config", "cfg.ron", "--out-dir", "tiles"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to load font"), "expected font error, got: {stderr}");
    assert!(out.stdout.is_empty(), "no manifest on failure");
    assert!(!tmp.path().join("tiles").exists());
}

#[test]
fn gen_then_clean_with_system_font() {
    let candidates = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    ];
    let Some(font) = candidates.iter().find(|p| Path::new(p).is_file()) else {
        eprintln!("no system font found, skipping");
        return;
    };
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("cfg.ron"), format!("(font_path: {font:?})")).unwrap();
    let out = run(
        tmp.path(),
        &["gen", "--variant", "minimal", "--config", "cfg.ron", "--manifest-json", "manifest.json"],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with(r#""0":"grass" "1":"dirt" "2":"snow" "#));
    assert!(tmp.path().join("part-0g.png").is_file());
    assert!(tmp.path().join("part-24X.png").is_file());
    let js: serde_json::Value = serde_json::from_str(&fs::read_to_string(tmp.path().join("manifest.json")).unwrap()).unwrap();
    assert_eq!(js["24"], "default");

    let out = run(tmp.path(), &["clean", "--variant", "minimal", "--config", "cfg.ron"]);
    assert!(out.status.success());
    assert!(!tmp.path().join("part-0g.png").exists());
    assert!(!tmp.path().join("part-24X.png").exists());
}
