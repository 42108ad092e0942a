use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs the binary with config and data directories confined to `home`.
fn pixelpad_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pixelpad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env_remove("RUST_LOG");
    cmd
}

fn write_script(home: &TempDir, name: &str, body: &str) -> String {
    let path = home.path().join(name);
    fs::write(&path, body).unwrap();
    path.display().to_string()
}

#[test]
fn help_prints_usage() {
    let home = TempDir::new().unwrap();
    pixelpad_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pixel-art grid editor"));
}

#[test]
fn palettes_lists_builtins() {
    let home = TempDir::new().unwrap();
    pixelpad_cmd(&home)
        .arg("palettes")
        .assert()
        .success()
        .stdout(predicate::str::contains("classic - 8 colors (default)"))
        .stdout(predicate::str::contains("gameboy - 4 colors"))
        .stdout(predicate::str::contains("#ff4500"));
}

#[test]
fn configured_palettes_are_listed() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("config").join("pixelpad");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[palettes]\nduo = [\"#101010\", \"#efefef\"]\n",
    )
    .unwrap();

    pixelpad_cmd(&home)
        .arg("palettes")
        .assert()
        .success()
        .stdout(predicate::str::contains("duo - 2 colors"));
}

#[test]
fn draw_renders_mirrored_script() {
    let home = TempDir::new().unwrap();
    let script = write_script(&home, "corner.txt", "color 2\ndown 0 0\nup\n");

    pixelpad_cmd(&home)
        .args(["draw", "--size", "8", "--mirror", "--script", &script])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2.......\n"))
        .stdout(predicate::str::contains(".......2\n"))
        .stdout(predicate::str::contains("8x8 | palette classic | color 3/8"));
}

#[test]
fn draw_reads_script_from_stdin() {
    let home = TempDir::new().unwrap();
    pixelpad_cmd(&home)
        .args(["draw", "--size", "8", "--script", "-"])
        .write_stdin("down 1 0\nmove 1 1\nmove 1 2\nleave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("........\n000.....\n"));
}

#[test]
fn draw_reports_bad_script_line() {
    let home = TempDir::new().unwrap();
    let script = write_script(&home, "bad.txt", "down 0 0\nwiggle\n");

    pixelpad_cmd(&home)
        .args(["draw", "--script", &script])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown command 'wiggle'"));
}

#[test]
fn draw_rejects_unsupported_size() {
    let home = TempDir::new().unwrap();
    pixelpad_cmd(&home)
        .args(["draw", "--size", "12", "--script", "-"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("grid size 12 is not supported"));
}

#[test]
fn saved_drawing_appears_in_gallery() {
    let home = TempDir::new().unwrap();
    let gallery = home.path().join("gallery");
    let gallery_arg = gallery.display().to_string();
    let script = write_script(&home, "dot.txt", "down 3 3\nup\n");

    pixelpad_cmd(&home)
        .args([
            "draw",
            "--size",
            "8",
            "--script",
            &script,
            "--title",
            "  Lonely dot ",
            "--gallery-dir",
            &gallery_arg,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 'Lonely dot' as "));
    assert!(gallery.join("gallery.json").exists());

    pixelpad_cmd(&home)
        .args(["gallery", "list", "--gallery-dir", &gallery_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lonely dot"))
        .stdout(predicate::str::contains("8x8"));
}

#[test]
fn edit_starts_from_saved_drawing() {
    let home = TempDir::new().unwrap();
    let gallery = home.path().join("gallery");
    let gallery_arg = gallery.display().to_string();
    let first = write_script(&home, "first.txt", "down 0 0\nup\n");

    pixelpad_cmd(&home)
        .args(["draw", "--size", "8", "--script", &first, "--title", "base"])
        .args(["--gallery-dir", &gallery_arg])
        .assert()
        .success();

    let raw = fs::read_to_string(gallery.join("gallery.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let id = value["drawings"][0]["id"].as_str().unwrap().to_string();

    pixelpad_cmd(&home)
        .args(["draw", "--edit", &id[..8], "--script", "-"])
        .args(["--gallery-dir", &gallery_arg])
        .write_stdin("down 0 1\nup\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("00......\n"));

    pixelpad_cmd(&home)
        .args(["gallery", "delete", &id, "--gallery-dir", &gallery_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 'base'"));

    pixelpad_cmd(&home)
        .args(["gallery", "show", &id, "--gallery-dir", &gallery_arg])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no drawing with id"));
}

#[test]
fn empty_title_is_rejected() {
    let home = TempDir::new().unwrap();
    let gallery_arg = home.path().join("gallery").display().to_string();

    pixelpad_cmd(&home)
        .args(["draw", "--script", "-", "--title", "   "])
        .args(["--gallery-dir", &gallery_arg])
        .write_stdin("down 0 0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("title must not be empty"));
}

#[test]
fn init_config_writes_example_once() {
    let home = TempDir::new().unwrap();
    pixelpad_cmd(&home).arg("init-config").assert().success();
    assert!(
        home.path()
            .join("config")
            .join("pixelpad")
            .join("config.toml")
            .exists()
    );

    pixelpad_cmd(&home)
        .arg("init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
