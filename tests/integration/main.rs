//! Integration tests for scw-cache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn scw_cache() -> Command {
        cargo_bin_cmd!("scw-cache")
    }

    /// A command wired to a throwaway cache file
    fn scw_cache_in(temp: &TempDir) -> Command {
        let mut cmd = scw_cache();
        cmd.env("SCW_CACHE_FILE", temp.path().join(".scw-cache.db"));
        cmd
    }

    #[test]
    fn help_displays() {
        scw_cache()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("resource identifier cache"));
    }

    #[test]
    fn version_displays() {
        scw_cache()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("scw-cache"));
    }

    #[test]
    fn path_prints_cache_file() {
        let temp = TempDir::new().unwrap();
        scw_cache_in(&temp)
            .arg("path")
            .assert()
            .success()
            .stdout(predicate::str::contains(".scw-cache.db"));
    }

    #[cfg(unix)]
    #[test]
    fn path_defaults_to_home() {
        let temp = TempDir::new().unwrap();
        scw_cache()
            .arg("path")
            .env_remove("SCW_CACHE_FILE")
            .env("HOME", temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(temp.path().to_string_lossy().to_string()));
    }

    #[test]
    fn insert_persists_and_lookup_resolves() {
        let temp = TempDir::new().unwrap();

        scw_cache_in(&temp)
            .args(["insert", "server", "srv-a4e2", "web frontend"])
            .assert()
            .success();

        assert!(temp.path().join(".scw-cache.db").exists());

        scw_cache_in(&temp)
            .args(["lookup", "web-front", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("srv-a4e2"));
    }

    #[test]
    fn lookup_tags_kind_in_json() {
        let temp = TempDir::new().unwrap();

        scw_cache_in(&temp)
            .args(["insert", "bootscript", "bs-9", "mainline kernel"])
            .assert()
            .success();

        scw_cache_in(&temp)
            .args(["lookup", "mainline", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"kind\": \"bootscript\""));
    }

    #[test]
    fn lookup_without_match_reports_none() {
        let temp = TempDir::new().unwrap();
        scw_cache_in(&temp)
            .args(["lookup", "ghost"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No matches."));
    }

    #[test]
    fn remove_then_lookup_misses() {
        let temp = TempDir::new().unwrap();

        scw_cache_in(&temp)
            .args(["insert", "image", "img-1", "Ubuntu Focal LTS"])
            .assert()
            .success();
        scw_cache_in(&temp)
            .args(["remove", "image", "img-1"])
            .assert()
            .success();

        scw_cache_in(&temp)
            .args(["lookup", "user/ubuntu-focal"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No matches."));
    }

    #[test]
    fn clear_requires_a_target() {
        let temp = TempDir::new().unwrap();
        scw_cache_in(&temp).arg("clear").assert().failure();
    }

    #[test]
    fn clear_all_reports_count() {
        let temp = TempDir::new().unwrap();

        scw_cache_in(&temp)
            .args(["insert", "server", "srv-1", "one"])
            .assert()
            .success();
        scw_cache_in(&temp)
            .args(["insert", "snapshot", "snap-1", "two"])
            .assert()
            .success();

        scw_cache_in(&temp)
            .args(["clear", "--all"])
            .assert()
            .success()
            .stdout(predicate::str::contains("2"));
    }

    #[test]
    fn status_lists_all_kinds() {
        let temp = TempDir::new().unwrap();
        scw_cache_in(&temp)
            .args(["status", "--format", "plain"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("server")
                    .and(predicate::str::contains("image"))
                    .and(predicate::str::contains("snapshot"))
                    .and(predicate::str::contains("bootscript")),
            );
    }

    #[test]
    fn corrupt_cache_is_fatal_with_hint() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".scw-cache.db"), "{definitely not json").unwrap();

        scw_cache_in(&temp)
            .args(["lookup", "anything"])
            .assert()
            .failure()
            .stderr(
                predicate::str::contains("Corrupt cache file")
                    .and(predicate::str::contains("Hint:")),
            );
    }

    #[test]
    fn completion_generates_bash() {
        scw_cache()
            .args(["completion", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("scw-cache"));
    }
}
