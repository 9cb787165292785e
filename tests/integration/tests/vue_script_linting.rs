//! End-to-end tests for the whole pipeline against mixed projects.
//!
//! These run the real binary over temp projects mixing plain TypeScript
//! and Vue single-file components, and assert on report output, exit
//! codes and the exact bytes left on disk.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vuelint_cmd(dir: &Path) -> Command {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("Failed to find workspace root");
    let bin_path = workspace_root.join("target/debug/vuelint");
    let mut cmd = Command::new(bin_path);
    cmd.current_dir(dir);
    cmd
}

fn setup(rules_json: &str, files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tslint.json"), rules_json).unwrap();
    fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
    }
    dir
}

mod mixed_projects {
    use super::*;

    #[test]
    fn lints_ts_tsx_and_vue_sources() {
        let dir = setup(
            r#"{"rules": {"no-debugger": true}}"#,
            &[
                ("src/a.ts", "debugger;\n"),
                ("src/b.tsx", "debugger;\n"),
                ("src/c.vue", "<script lang=\"ts\">debugger;</script>\n"),
                ("src/d.js", "debugger;\n"),
            ],
        );

        let assert = vuelint_cmd(dir.path())
            .args(["--formatter", "prose"])
            .assert()
            .code(1);
        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

        assert_eq!(stdout.matches("debugger").count(), 3, "{stdout}");
        // .js files are not discovered.
        assert!(!stdout.contains("d.js"), "{stdout}");
    }

    #[test]
    fn node_modules_are_excluded_by_default() {
        let dir = setup(
            r#"{"rules": {"no-debugger": true}}"#,
            &[
                ("src/ok.ts", "export const x = 1;\n"),
                ("node_modules/dep/index.ts", "debugger;\n"),
            ],
        );

        vuelint_cmd(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("No lint errors found."));
    }

    #[test]
    fn tsconfig_exclude_is_honored() {
        let dir = setup(
            r#"{"rules": {"no-debugger": true}}"#,
            &[("generated/g.ts", "debugger;\n"), ("src/ok.ts", "export const x = 1;\n")],
        );
        fs::write(
            dir.path().join("tsconfig.json"),
            r#"{"exclude": ["generated", "node_modules"]}"#,
        )
        .unwrap();

        vuelint_cmd(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("No lint errors found."));
    }
}

mod fix_round_trips {
    use super::*;

    const COMPONENT: &str = "<template>\n  <nav>\n    <a href=\"#\">home</a>\n  </nav>\n</template>\n\n<script lang=\"ts\">\nvar active = false\nexport default { data: () => ({ active }) }\n</script>\n\n<style scoped>\nnav { display: flex; }\n</style>\n";

    #[test]
    fn fix_is_a_no_op_when_nothing_is_fixable() {
        let dir = setup(
            r#"{"rules": {"no-any": true}}"#,
            &[("app.vue", COMPONENT)],
        );

        vuelint_cmd(dir.path()).arg("--fix").assert().success();

        // Nothing was fixable, so the file is byte-for-byte untouched.
        assert_eq!(
            fs::read_to_string(dir.path().join("app.vue")).unwrap(),
            COMPONENT
        );
    }

    #[test]
    fn fix_preserves_template_and_style_byte_for_byte() {
        let dir = setup(
            r#"{"rules": {"no-var-keyword": true}}"#,
            &[("app.vue", COMPONENT)],
        );

        vuelint_cmd(dir.path())
            .arg("--fix")
            .assert()
            .success()
            .stdout(predicate::str::contains("Fixed 1 error in"));

        let fixed = fs::read_to_string(dir.path().join("app.vue")).unwrap();
        assert_eq!(fixed, COMPONENT.replace("var active", "let active"));
    }

    #[test]
    fn whitespace_fix_inside_script_leaves_template_whitespace_alone() {
        // Trailing whitespace in the template must survive a fix pass that
        // cleans the script.
        let source = "<template>\n  <p>padded   \n  </p>\n</template>\n<script lang=\"ts\">\nconst x = 1   \nexport { x }\n</script>\n";
        let dir = setup(
            r#"{"rules": {"no-trailing-whitespace": true}}"#,
            &[("app.vue", source)],
        );

        vuelint_cmd(dir.path()).arg("--fix").assert().success();

        let fixed = fs::read_to_string(dir.path().join("app.vue")).unwrap();
        assert!(fixed.contains("<p>padded   \n"), "{fixed}");
        assert!(fixed.contains("\nconst x = 1\n"), "{fixed}");
    }

    #[test]
    fn plain_ts_files_fix_in_place() {
        let dir = setup(
            r#"{"rules": {"prefer-const": true}}"#,
            &[("src/counter.ts", "let count = 0\nexport { count }\n")],
        );

        vuelint_cmd(dir.path()).arg("--fix").assert().success();

        assert_eq!(
            fs::read_to_string(dir.path().join("src/counter.ts")).unwrap(),
            "const count = 0\nexport { count }\n"
        );
    }
}

mod blank_line_handling {
    use super::*;

    #[test]
    fn padded_components_do_not_trip_the_blank_lines_rule() {
        // The script sits far down the document; its padded source starts
        // with a long run of blank lines that must not be reported.
        let dir = setup(
            r#"{"rules": {"no-consecutive-blank-lines": true}}"#,
            &[(
                "app.vue",
                "<template>\n  <p>1</p>\n  <p>2</p>\n  <p>3</p>\n</template>\n<script lang=\"ts\">\nconst x = 1\nexport { x }\n</script>\n",
            )],
        );

        vuelint_cmd(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("No lint errors found."));
    }

    #[test]
    fn real_blank_line_runs_inside_plain_files_are_reported() {
        let dir = setup(
            r#"{"rules": {"no-consecutive-blank-lines": true}}"#,
            &[("a.ts", "const a = 1\n\n\n\nconst b = 2\n")],
        );

        vuelint_cmd(dir.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("no-consecutive-blank-lines"));
    }
}
