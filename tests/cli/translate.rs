use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, catalog};

fn setup_templates(test: &CliTest) -> Result<String> {
    test.write_template(
        "cat1/a.pot",
        &catalog(&[("Open", "", false), ("Close", "", false)]),
    )?;
    test.write_template("cat1/b_caligraph.pot", &catalog(&[("Internal", "", false)]))?;
    test.read_file("templates/cat1/a.pot")
}

#[test]
fn test_translate_creates_missing_catalog() -> Result<()> {
    let test = CliTest::new()?;
    let template = setup_templates(&test)?;
    let translator = test.write_translator()?;

    let output = test.translate_command(&translator).output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(test.read_file("l10n/de/cat1/a.po")?, template);
    assert_eq!(
        test.read_file("l10n/de/cat1/a.log")?,
        "translating l10n/de/cat1/a.po\n"
    );
    assert_eq!(test.read_file("l10n/de/cat1/a.err")?, "model unavailable\n");
    assert!(!test.exists("l10n/de/cat1/b_caligraph.po"));
    assert!(!test.exists("l10n/de/cat1/b_caligraph.log"));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("b_caligraph.pot is an internal file, ignoring"));
    assert!(stderr.contains(
        "create: l10n/de/cat1/a.po does not exist, copied it from template for translation"
    ));
    assert!(stderr.contains(
        "translate: translating l10n/de/cat1/a.po and writing log to l10n/de/cat1/a.log"
    ));

    Ok(())
}

#[test]
fn test_translate_skips_complete_catalog() -> Result<()> {
    let test = CliTest::new()?;
    setup_templates(&test)?;
    let done = catalog(&[("Open", "Öffnen", false), ("Close", "Schließen", false)]);
    test.write_localized("cat1/a.po", &done)?;
    let translator = test.write_translator()?;

    let output = test.translate_command(&translator).output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("l10n/de/cat1/a.po")?, done);
    assert!(!test.exists("l10n/de/cat1/a.log"));
    assert!(!test.exists("l10n/de/cat1/a.err"));
    assert!(
        String::from_utf8(output.stderr)?
            .contains("skip: l10n/de/cat1/a.po does not need further translating")
    );

    Ok(())
}

#[test]
fn test_translate_runs_on_fuzzy_catalog_despite_failure() -> Result<()> {
    let test = CliTest::new()?;
    setup_templates(&test)?;
    test.write_localized(
        "cat1/a.po",
        &catalog(&[("Open", "Öffnen", true), ("Close", "Schließen", true)]),
    )?;
    let translator = test.write_translator()?;

    let output = test.translate_command(&translator).output()?;

    // The translator exits 1; that is recorded only in its logs.
    assert!(output.status.success());
    assert_eq!(
        test.read_file("l10n/de/cat1/a.log")?,
        "translating l10n/de/cat1/a.po\n"
    );
    assert_eq!(test.read_file("l10n/de/cat1/a.err")?, "model unavailable\n");

    Ok(())
}

#[test]
fn test_translate_missing_translator_fails() -> Result<()> {
    let test = CliTest::new()?;
    setup_templates(&test)?;

    let output = test
        .translate_command("/nonexistent/potrack-translator")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8(output.stderr)?
            .contains("Error: Failed to run translator '/nonexistent/potrack-translator'")
    );
    // The copy happens before the translator is spawned.
    assert!(test.exists("l10n/de/cat1/a.po"));
    assert!(!test.exists("l10n/de/cat1/a.log"));

    Ok(())
}

#[test]
fn test_translate_translator_from_env() -> Result<()> {
    let test = CliTest::new()?;
    setup_templates(&test)?;
    let translator = test.write_translator()?;

    let output = test
        .command()
        .env("POTRACK_TRANSLATOR", &translator)
        .args(["--action", "translate", "l10n/de", "templates"])
        .output()?;

    assert!(output.status.success());
    assert!(test.exists("l10n/de/cat1/a.log"));

    Ok(())
}
