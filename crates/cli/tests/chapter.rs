use d2lmd_cli::chapter::{COMBINED_FILE_NAME, build_chapter, markdown_files};
use d2lmd_cli::{convert_file, load_options};
use d2lmd_core::D2lError;
use d2lmd_filter::Options;
use std::fs;

#[test]
fn builds_pages_and_combined_chapter() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("02-loops.md"), "# Loops\n\n```python\nfor i in x: pass\n```\n").unwrap();
    fs::write(dir.path().join("01-intro.md"), "# Intro\n\nIt\u{2019}s here.\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let report = build_chapter(dir.path(), None, &Options::default(), Some(2)).unwrap();

    assert_eq!(
        report.pages,
        vec![dir.path().join("01-intro.html"), dir.path().join("02-loops.html")]
    );
    assert_eq!(report.combined, dir.path().join(COMBINED_FILE_NAME));

    let intro = fs::read_to_string(dir.path().join("01-intro.html")).unwrap();
    assert!(intro.starts_with("<!DOCTYPE html>"));
    assert!(intro.contains("<p>It's here.</p>"));

    let combined = fs::read_to_string(&report.combined).unwrap();
    assert_eq!(combined.matches("<!DOCTYPE html>").count(), 1);
    let intro_at = combined.find("<h1 id=\"intro\">").unwrap();
    let loops_at = combined.find("<h1 id=\"loops\">").unwrap();
    assert!(intro_at < loops_at);
    assert!(combined.contains("<code class=\"language-python\">for i in x: pass\n</code>"));
}

#[test]
fn custom_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.md"), "text\n").unwrap();

    let target = out.path().join("week1.html");
    let report = build_chapter(dir.path(), Some(target.as_path()), &Options::default(), None).unwrap();
    assert_eq!(report.combined, target);
    assert!(target.is_file());
}

#[test]
fn rejects_missing_and_empty_folders() {
    let dir = tempfile::tempdir().unwrap();

    let err = build_chapter(dir.path(), None, &Options::default(), None).unwrap_err();
    assert!(matches!(err, D2lError::EmptyChapter(_)));

    let missing = dir.path().join("nope");
    assert!(matches!(
        markdown_files(&missing),
        Err(D2lError::NotADirectory(_))
    ));
}

#[test]
fn convert_file_with_yaml_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("d2l.yaml");
    fs::write(&config, "wrap_document: false\nlinks_in_new_tab: false\n").unwrap();
    let input = dir.path().join("page.md");
    fs::write(&input, "<!-- -->\n\n[a](b)\n").unwrap();
    let output = dir.path().join("page.html");

    let options = load_options(Some(config.as_path())).unwrap();
    convert_file(&input, Some(output.as_path()), &options).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "<p><a href=\"b\">a</a></p>\n");
}

#[test]
fn bad_config_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("broken.yaml");
    fs::write(&config, "languages: 12\n").unwrap();

    let err = load_options(Some(config.as_path())).unwrap_err();
    assert!(matches!(err, D2lError::Config { .. }));
    assert!(err.to_string().contains("broken.yaml"));
}
