use super::rewrite;

const YORU: &str = include_str!("files/yoru.osu");

#[test]
fn test_yoru() {
    let output = rewrite(YORU, true);
    assert!(output.warnings.is_empty());
    assert_eq!(
        output.background.as_ref().map(|bg| bg.filename.as_str()),
        Some("yoru.jpg")
    );

    let text = output.text;
    assert!(text.contains("AudioFilename: audio.mp3\r\n"));
    assert!(text.contains("TitleUnicode:夜に駆ける (TV Size)\r\n"));
    assert!(text.contains("Tags:\r\n"));
    assert!(!text.contains("Bookmarks"));
    assert!(!text.contains("Combo1"));
    assert!(!text.contains("B|"));

    let timing_points: Vec<_> = text
        .split("\r\n")
        .skip_while(|line| *line != "[TimingPoints]")
        .skip(1)
        .filter(|line| !line.is_empty())
        .collect();
    assert_eq!(timing_points.len(), 64);
    assert!(
        timing_points
            .iter()
            .all(|line| line.ends_with(",4,0,0,100,1,0"))
    );

    assert_eq!(rewrite(&text, true).text, text);
}
