mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use predicates::str::{contains, ends_with, is_empty, starts_with};

    use std::fs;
    use std::path::Path;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "imgsweep";

    fn write(root: &Path, relative: &str, content: &str) -> std::io::Result<()> {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
    }

    fn site(images: &[&str]) -> Result<tempfile::TempDir, std::io::Error> {
        let root = tempfile::tempdir()?;
        fs::create_dir(root.path().join("images"))?;
        for image in images {
            fs::write(root.path().join("images").join(image), b"")?;
        }
        Ok(root)
    }

    #[test]
    fn test_output__end_to_end_report() -> TestResult {
        let root = site(&["a.png", "b.jpg", "c.gif"])?;
        write(root.path(), "index.html", r#"<img src="images/a.png">"#)?;
        write(
            root.path(),
            "css/custom.css",
            ".hero { background: url(../images/b.jpg?v=2) }",
        )?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path()).env_remove("RUST_LOG");

        let banner = "=".repeat(60);
        let rule = "-".repeat(60);
        let expected = format!(
            "{banner}\n\
             Total images in directory: 3\n\
             Used images: 2\n\
             Unused images: 1\n\
             {banner}\n\
             \n\
             UNUSED IMAGES (safe to delete):\n\
             {rule}\n  \
             images/c.gif\n\
             \n\
             {banner}\n\
             Used images (for review):\n\
             {rule}\n  \
             a.png\n  \
             b.jpg\n"
        );
        cmd.assert().success().stdout(expected).stderr(is_empty());
        Ok(())
    }

    #[test]
    fn test_output__when_image_directory_empty() -> TestResult {
        let root = site(&[])?;
        write(root.path(), "index.html", r#"<img src="images/a.png">"#)?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path());

        cmd.assert()
            .success()
            .stdout(contains("Total images in directory: 0\n"))
            .stdout(contains("\nAll images are used!\n"))
            .stdout(ends_with("  a.png\n"));
        Ok(())
    }

    #[test]
    fn test_output__when_listed_page_missing() -> TestResult {
        let root = site(&["a.png", "b.png"])?;
        // Only one of the known pages exists, no stylesheet
        write(root.path(), "sluzby.html", "<img src='images/b.png'>")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path());

        cmd.assert()
            .success()
            .stdout(contains("Used images: 1\n"))
            .stdout(contains("  images/a.png\n"));
        Ok(())
    }

    #[test]
    fn test_output__when_image_directory_missing() -> TestResult {
        let root = tempfile::tempdir()?;
        write(root.path(), "index.html", r#"<img src="images/a.png">"#)?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path()).env_remove("RUST_LOG");

        cmd.assert()
            .failure()
            .code(1)
            .stdout(is_empty())
            .stderr(starts_with("Error: Could not list image directory '"))
            .stderr(contains("images'"));
        Ok(())
    }

    #[test]
    fn test_output__root_flag() -> TestResult {
        let root = site(&["kept.png", "stale.png"])?;
        write(root.path(), "index.html", r#"<img src="images/kept.png">"#)?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--root").arg(root.path()).arg("--format").arg("minimal");

        cmd.assert().success().stdout("images/stale.png\n");
        Ok(())
    }

    #[test]
    fn test_output__custom_layout_flags() -> TestResult {
        let root = tempfile::tempdir()?;
        write(root.path(), "static/img/logo.svg", "")?;
        write(root.path(), "static/img/old.svg", "")?;
        write(root.path(), "home.html", r#"<img src="/static/img/logo.svg">"#)?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path())
            .arg("--images-dir")
            .arg("static/img")
            .arg("--html")
            .arg("home.html");

        cmd.assert()
            .success()
            .stdout(contains("  static/img/old.svg\n"))
            .stdout(contains("Unused images: 1\n"));
        Ok(())
    }

    #[test]
    fn test_output__json_format() -> TestResult {
        let root = site(&["a.png", "c.gif"])?;
        write(root.path(), "index.html", r#"<img src="images/a.png">"#)?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path()).arg("--format").arg("json");

        let output = cmd.output()?;
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(value["unused"], serde_json::json!(["c.gif"]));
        assert_eq!(value["counts"]["total"], 2);
        assert_eq!(value["sources"]["scanned"], serde_json::json!(["index.html"]));
        Ok(())
    }

    #[test]
    fn test_output__config_file_in_root() -> TestResult {
        let root = tempfile::tempdir()?;
        write(root.path(), "assets/a.png", "")?;
        write(root.path(), "assets/b.png", "")?;
        write(root.path(), "main.css", "div { background: url('../assets/b.png') }")?;
        write(
            root.path(),
            ".imgsweep.toml",
            "images_dir = \"assets\"\nstylesheets = [\"main.css\"]\noutput_format = \"minimal\"\n",
        )?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path());

        cmd.assert().success().stdout("assets/a.png\n");
        Ok(())
    }

    #[test]
    fn test_output__invalid_config_file() -> TestResult {
        let root = site(&[])?;
        write(root.path(), ".imgsweep.toml", "images_dir = [")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path());

        cmd.assert()
            .failure()
            .stderr(contains("Error: Configuration error: Invalid TOML"));
        Ok(())
    }

    #[test]
    fn test_output__no_config_ignores_file() -> TestResult {
        let root = site(&["a.png"])?;
        write(root.path(), ".imgsweep.toml", "images_dir = \"missing\"\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path()).arg("--no-config");

        cmd.assert()
            .success()
            .stdout(contains("  images/a.png\n"));
        Ok(())
    }

    #[test]
    fn test_output__when_unknown_format() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--format").arg("xml");

        cmd.assert()
            .failure()
            .stderr(contains("invalid value 'xml' for '--format <FORMAT>'"));
        Ok(())
    }

    #[test]
    fn test_output__does_not_touch_files() -> TestResult {
        let root = site(&["unused.png"])?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path());

        cmd.assert().success();
        assert!(root.path().join("images/unused.png").exists());
        Ok(())
    }

    #[test]
    fn test_output__references_follow_images_dir() -> TestResult {
        let root = tempfile::tempdir()?;
        write(root.path(), "img/logo.png", "")?;
        write(root.path(), "img/old.png", "")?;
        write(root.path(), "index.html", r#"<img src="img/logo.png">"#)?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path())
            .arg("--images-dir")
            .arg("img")
            .arg("--format")
            .arg("minimal");

        cmd.assert().success().stdout("img/old.png\n");
        Ok(())
    }

    #[test]
    fn test_output__reference_prefix_flag() -> TestResult {
        let root = tempfile::tempdir()?;
        write(root.path(), "public/pictures/hero.jpg", "")?;
        write(root.path(), "public/pictures/unused.jpg", "")?;
        write(root.path(), "index.html", "<img src='images/hero.jpg'>")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path())
            .arg("--images-dir")
            .arg("public/pictures")
            .arg("--reference-prefix")
            .arg("images")
            .arg("--format")
            .arg("minimal");

        cmd.assert()
            .success()
            .stdout("public/pictures/unused.jpg\n");
        Ok(())
    }

    #[test]
    fn test_output__unreadable_source_is_fatal() -> TestResult {
        let root = site(&["a.png"])?;
        fs::create_dir(root.path().join("index.html"))?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path()).env_remove("RUST_LOG");

        cmd.assert()
            .failure()
            .code(1)
            .stdout(is_empty())
            .stderr(starts_with("Error: Could not read source file '"))
            .stderr(contains("index.html'"));
        Ok(())
    }

    #[test]
    fn test_output__warns_on_non_utf8_source() -> TestResult {
        let root = site(&["a.png"])?;
        fs::write(root.path().join("index.html"), [0xff, 0xfe, b'<', b'p', b'>'])?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path()).env_remove("RUST_LOG");

        cmd.assert()
            .success()
            .stdout(contains("  images/a.png\n"))
            .stderr(contains("Skipped index.html (html): not valid UTF-8"));
        Ok(())
    }

    #[test]
    fn test_output__quiet_suppresses_warnings() -> TestResult {
        let root = site(&["a.png"])?;
        fs::write(root.path().join("index.html"), [0xff, 0xfe])?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path()).env("RUST_LOG", "debug").arg("-q");

        cmd.assert().success().stderr(is_empty());
        Ok(())
    }

    #[test]
    fn test_output__rust_log_is_honoured() -> TestResult {
        let root = site(&["a.png"])?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(root.path()).env("RUST_LOG", "debug");

        cmd.assert()
            .success()
            .stderr(contains("Found 1 file(s) in 'images'"))
            .stdout(contains("Total images in directory: 1\n"));
        Ok(())
    }
}
