use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = include_str!("fixtures/license_header.txt");

const OLD_HEADER: &str = "\
/* pidgin
 *
 * Pidgin is the legal property of its developers, whose names are too numerous
 * to list here.
 */
";

fn cmd() -> Command {
    cargo_bin_cmd!("check-license-header")
}

fn tree(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    fs::write(tmp.path().join("header.txt"), HEADER).expect("write template");
    for (name, contents) in files {
        let path = tmp.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, contents).expect("write source");
    }
    tmp
}

fn run(dir: &Path, files: &[&str]) -> assert_cmd::assert::Assert {
    cmd().arg(dir).arg("header.txt").args(files).assert()
}

#[test]
fn conforming_files_pass_silently() {
    let body = format!("{HEADER}#include \"purplecore.h\"\n");
    let tmp = tree(&[("libpurple/core.c", &body), ("libpurple/core.h", HEADER)]);

    run(tmp.path(), &["libpurple/core.c", "libpurple/core.h"])
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn old_header_is_reported_with_diff() {
    let body = format!("{OLD_HEADER}\n#include <glib.h>\n\nint x;\n");
    let tmp = tree(&[("pidgin/about.c", &body)]);

    run(tmp.path(), &["pidgin/about.c"])
        .code(1)
        .stdout(contains("--- a/pidgin/about.c"))
        .stdout(contains("+++ b/pidgin/about.c"))
        .stdout(contains("-/* pidgin"))
        .stdout(contains("+ * Purple - Internet Messaging Library"))
        .stdout(contains("-#include <glib.h>").not());
}

#[test]
fn file_without_comment_gets_header_prepended() {
    let tmp = tree(&[("gone.c", "#include <glib.h>\n")]);

    run(tmp.path(), &["gone.c"])
        .code(1)
        .stdout(contains("+/*\n"))
        .stdout(contains(" #include <glib.h>\n"));
}

#[test]
fn every_file_is_reported() {
    let tmp = tree(&[("a.c", "int a;\n"), ("b.c", HEADER), ("c.c", OLD_HEADER)]);

    run(tmp.path(), &["a.c", "b.c", "c.c"])
        .code(1)
        .stdout(contains("a/a.c"))
        .stdout(contains("a/c.c"))
        .stdout(contains("a/b.c").not());
}

#[test]
fn missing_file_fails_but_others_are_checked() {
    let tmp = tree(&[("a.c", "int a;\n")]);

    run(tmp.path(), &["missing.c", "a.c"])
        .code(1)
        .stderr(contains("missing.c"))
        .stdout(contains("a/a.c"));
}

#[test]
fn too_few_arguments_print_usage() {
    let tmp = tree(&[]);

    cmd()
        .arg(tmp.path())
        .arg("header.txt")
        .assert()
        .code(1)
        .stdout(contains("usage: directory template-file file..."));
}

#[test]
fn missing_template_is_fatal() {
    let tmp = tree(&[("a.c", "int a;\n")]);

    cmd()
        .arg(tmp.path())
        .arg("nope.txt")
        .arg("a.c")
        .assert()
        .code(1)
        .stderr(contains("Failed to load template"));
}
