// tests/content_processing.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, git2gpt_cmd};
use git2gpt::processing::scrub;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_scrub_comments_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(
        temp.path(),
        "main.go",
        "// Package main does things.\npackage main\n\n/* helper */\nfunc f() {} // trailing\n",
    )?;

    git2gpt_cmd()
        .arg(temp.path())
        .arg("-c")
        .assert()
        .success()
        .stdout(predicate::str::contains("----\nmain.go\npackage main\n\n\nfunc f() {}\n"))
        .stdout(predicate::str::contains("Package main does things").not())
        .stdout(predicate::str::contains("helper").not())
        .stdout(predicate::str::contains("trailing").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_comments_kept_without_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "main.py", "x = 1  # set x\n")?;

    git2gpt_cmd()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("x = 1  # set x\n"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_unknown_extension_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "notes.txt", "# not a comment here\n// nor here\n")?;

    git2gpt_cmd()
        .arg(temp.path())
        .arg("--scrub-comments")
        .assert()
        .success()
        .stdout(predicate::str::contains("# not a comment here\n// nor here\n"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_comment_markers_in_strings_survive() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(
        temp.path(),
        "app.js",
        "const url = \"http://example.com\"; // site\nconst re = '/* no */';\n",
    )?;

    git2gpt_cmd()
        .arg(temp.path())
        .arg("-c")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "const url = \"http://example.com\";\nconst re = '/* no */';\n",
        ))
        .stdout(predicate::str::contains("site").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_scrub_is_idempotent_across_languages() {
    let samples = [
        ("c", "int x; /* a */ /* b */ // c\n/* d */ int y;\n"),
        ("rs", "fn f<'a>(s: &'a str) -> char { '\"' } // q\n"),
        ("py", "s = '# no'  # yes\n"),
        ("sql", "SELECT 1; -- one\n/* two */ SELECT 2;\n"),
        ("html", "<p>a</p><!-- b -->\n<p>c</p>\n"),
        ("hs", "main = print 1 -- one\n{- two -}\n"),
    ];
    for (extension, content) in samples {
        let once = scrub(content, extension);
        assert_eq!(scrub(&once, extension), once, "extension {}", extension);
    }
}
