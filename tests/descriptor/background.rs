use osz_cleaner::descriptor::event::EVENTS_BOILERPLATE;
use pretty_assertions::assert_eq;

use super::{crlf, rewrite, sample_cleaned, sample_descriptor};

#[test]
fn background_removed_when_disabled() {
    let output = rewrite(&sample_descriptor(), false);
    assert!(!output.text.contains("bg.jpg"));
    assert!(!output.text.contains("background.jpg"));
    assert_eq!(output.background, None);
}

#[test]
fn background_preserved_when_enabled() {
    let output = rewrite(&sample_descriptor(), true);
    let background = output.background.unwrap();
    assert_eq!(background.filename, "bg.jpg");
    assert_eq!(background.canonical_name, "background.jpg");

    let expected = sample_cleaned().replacen(
        "//Background and Video events\r\n",
        "//Background and Video events\r\n0,0,\"background.jpg\",0,0\r\n",
        1,
    );
    assert_eq!(output.text, expected);
    assert!(!output.text.contains("pv.avi"));
}

#[test]
fn last_declaration_wins() {
    let source = crlf(&[
        "[Events]",
        "0,0,\"first.png\",0,0",
        "0,0,\"second.JPG\",0,0",
        "[TimingPoints]",
    ]);
    let output = rewrite(&source, true);
    let background = output.background.unwrap();
    assert_eq!(background.filename, "second.JPG");
    assert_eq!(background.canonical_name, "background.jpg");

    let mut expected = vec!["[Events]", EVENTS_BOILERPLATE[0], "0,0,\"background.jpg\",0,0"];
    expected.extend(&EVENTS_BOILERPLATE[1..]);
    expected.extend(["", "[TimingPoints]"]);
    assert_eq!(output.text, crlf(&expected));
}

#[test]
fn malformed_declaration_is_absent() {
    let source = crlf(&["[Events]", "0,0,\"\",0,0", "0,0,\"noext\",0,0", "[TimingPoints]"]);
    let output = rewrite(&source, true);
    assert_eq!(output.background, None);
    assert_eq!(output.text, rewrite(&source, false).text);
}

#[test]
fn declaration_outside_events_ignored() {
    let source = crlf(&["[General]", "0,0,\"bg.jpg\",0,0", "[Events]", "[TimingPoints]"]);
    let output = rewrite(&source, true);
    assert_eq!(output.background, None);
    assert!(output.text.starts_with("[General]\r\n0,0,\"bg.jpg\",0,0\r\n"));
}
