use osz_cleaner::descriptor::event::EVENTS_BOILERPLATE;
use pretty_assertions::assert_eq;

use super::{crlf, rewrite, sample_descriptor};

#[test]
fn colours_and_hit_objects_removed() {
    let text = rewrite(&sample_descriptor(), true).text;
    assert!(!text.contains("[Colours]"));
    assert!(!text.contains("Combo1"));
    assert!(!text.contains("[HitObjects]"));
    assert!(!text.contains("256,192,500"));
}

#[test]
fn boilerplate_follows_events_header() {
    for source in [
        crlf(&["[Events]", "[TimingPoints]"]),
        crlf(&["[Events]", "3,100,163,162,255", "//Break Periods", "[TimingPoints]"]),
        sample_descriptor(),
    ] {
        let text = rewrite(&source, false).text;
        let lines: Vec<_> = text.split("\r\n").collect();
        let header = lines.iter().position(|line| *line == "[Events]").unwrap();
        assert_eq!(&lines[header + 1..header + 9], &EVENTS_BOILERPLATE[..]);
        assert_eq!(lines[header + 9], "");
    }
}

#[test]
fn no_events_header_no_boilerplate() {
    let source = crlf(&["[General]", "Mode: 0", "[TimingPoints]", "0,500,4,0,0,100,1,0"]);
    let text = rewrite(&source, true).text;
    assert_eq!(text, source);
}

#[test]
fn lf_input_produces_crlf_output() {
    let text = rewrite("[General]\nCountdown: 1\n", false).text;
    assert_eq!(text, "[General]\r\nCountdown: 0\r\n");
}

#[test]
fn header_inside_longer_line() {
    let source = crlf(&["// [HitObjects] follow", "1,2,3"]);
    assert_eq!(rewrite(&source, false).text, "");
}

#[test]
fn unknown_sections_kept() {
    let source = crlf(&["[Difficulty]", "CircleSize:4", "[Fonts]", "Face: Arial"]);
    assert_eq!(
        rewrite(&source, false).text,
        crlf(&["[Difficulty]", "CircleSize:5", "[Fonts]", "Face: Arial"])
    );
}

#[test]
fn canonical_descriptor_maps_to_itself() {
    let body = [
        "osu file format v14",
        "",
        "[General]",
        "AudioFilename: audio.ogg",
        "AudioLeadIn: 0",
        "PreviewTime: -1",
        "Mode: 0",
        "",
        "[Metadata]",
        "Title:x",
        "Creator:",
        "BeatmapID:0",
        "",
        "[Difficulty]",
        "HPDrainRate:5",
        "",
    ];
    let mut source_lines = body.to_vec();
    source_lines.extend(["[Events]", "[TimingPoints]"]);
    let mut expected_lines = body.to_vec();
    expected_lines.push("[Events]");
    expected_lines.extend(EVENTS_BOILERPLATE);
    expected_lines.extend(["", "[TimingPoints]"]);

    assert_eq!(rewrite(&crlf(&source_lines), false).text, crlf(&expected_lines));
}

fn events_block() -> Vec<&'static str> {
    let mut lines = vec!["[Events]"];
    lines.extend(EVENTS_BOILERPLATE);
    lines.push("");
    lines
}

#[test]
fn unusual_section_orders() {
    let record = "0,500,4,0,0,100,1,0";
    let background = "0,0,\"bg.jpg\",0,0";
    let sprite = "Sprite,Foreground,Centre,\"sb/me.png\",320,240";
    let cases: Vec<(&str, Vec<&str>, Vec<&str>)> = vec![
        (
            "events after timing points",
            vec!["[TimingPoints]", record, "[Events]", background, sprite],
            [vec!["[TimingPoints]", record], events_block()].concat(),
        ),
        (
            "timing points after late events",
            vec!["[TimingPoints]", "[Events]", sprite, "[TimingPoints]", record],
            [vec!["[TimingPoints]"], events_block(), vec!["[TimingPoints]", record]].concat(),
        ),
        (
            "events after colours",
            vec!["[Colours]", "Combo1 : 1,2,3", "[Events]", background, sprite],
            vec![],
        ),
        (
            "hit objects inside events",
            vec!["[Events]", background, "[HitObjects]", "[TimingPoints]", record],
            events_block(),
        ),
        (
            "colours inside events",
            vec!["[Events]", "[Colours]", "[TimingPoints]", record, "[HitObjects]", "1,2,3"],
            events_block(),
        ),
        (
            "field headers inside events",
            vec!["[Events]", "[General]", "Mode: 1", sprite, "[TimingPoints]", record],
            [events_block(), vec!["[TimingPoints]", record]].concat(),
        ),
        (
            "hit objects before everything",
            vec!["[HitObjects]", "[General]", "[Events]", background],
            vec![],
        ),
    ];

    for (name, source, expected) in cases {
        let output = rewrite(&crlf(&source), false);
        assert_eq!(output.text, crlf(&expected), "{name}");
        assert!(!output.text.contains("bg.jpg"), "{name}");
        assert!(!output.text.contains("Sprite"), "{name}");
    }
}

#[test]
fn late_events_keeps_background() {
    let source = crlf(&["[TimingPoints]", "[Events]", "0,0,\"bg.jpg\",0,0"]);
    let output = rewrite(&source, true);
    assert_eq!(
        output.background.map(|bg| bg.canonical_name),
        Some("background.jpg".to_string())
    );
    assert!(output.text.contains("//Background and Video events\r\n0,0,\"background.jpg\",0,0\r\n"));
}
