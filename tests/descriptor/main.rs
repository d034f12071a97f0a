//! Tests for `osz_cleaner::descriptor`.

mod background;
mod files;
mod idempotence;
mod sections;
mod timing_points;

use osz_cleaner::descriptor::{RewriteOptions, RewriteOutput, rewrite_descriptor};

/// Joins the lines with CRLF, terminating each one.
pub fn crlf(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\r\n")).collect()
}

/// Rewrites with background preservation on or off.
pub fn rewrite(source: &str, preserve_background: bool) -> RewriteOutput {
    rewrite_descriptor(
        source,
        RewriteOptions {
            preserve_background,
        },
    )
}

/// A descriptor shaped like one saved by the editor.
pub fn sample_descriptor() -> String {
    crlf(&[
        "osu file format v14",
        "",
        "[General]",
        "AudioFilename: Artist - Some Song.mp3",
        "AudioLeadIn: 500",
        "PreviewTime: 61234",
        "Countdown: 1",
        "SampleSet: Drum",
        "StackLeniency: 0.5",
        "Mode: 0",
        "LetterboxInBreaks: 1",
        "SpecialStyle: 0",
        "WidescreenStoryboard: 1",
        "",
        "[Editor]",
        "Bookmarks: 1000,2000",
        "DistanceSpacing: 1.3",
        "BeatDivisor: 8",
        "GridSize: 4",
        "TimelineZoom: 2.2",
        "",
        "[Metadata]",
        "Title:Some Song",
        "TitleUnicode:Some Song",
        "Artist:Artist",
        "ArtistUnicode:Artist",
        "Creator:Mapper",
        "Version:Insane",
        "Source:Some Anime",
        "Tags:tag1 tag2",
        "BeatmapID:1234567",
        "BeatmapSetID:654321",
        "",
        "[Difficulty]",
        "HPDrainRate:6",
        "CircleSize:4",
        "OverallDifficulty:8",
        "ApproachRate:9",
        "SliderMultiplier:1.8",
        "SliderTickRate:2",
        "",
        "[Events]",
        "//Background and Video events",
        "0,0,\"bg.jpg\",0,0",
        "Video,0,\"pv.avi\"",
        "//Break Periods",
        "2,30000,40000",
        "//Storyboard Layer 0 (Background)",
        "Sprite,Background,Centre,\"sb/star.png\",320,240",
        " F,0,1000,2000,0,1",
        "//Storyboard Sound Samples",
        "",
        "[TimingPoints]",
        "500,333.333333333333,4,2,1,60,1,0",
        "10000,-100,4,2,1,60,0,1",
        "20000,-50,4,2,0,80,0,0",
        "30000,300,4,1,0,100,1,1",
        "",
        "",
        "[Colours]",
        "Combo1 : 255,128,0",
        "Combo2 : 0,128,255",
        "",
        "[HitObjects]",
        "256,192,500,5,0,0:0:0:0:",
        "100,100,1000,2,0,L|200:100,1,100",
    ])
}

/// The expected cleaned form of [`sample_descriptor`] without background preservation.
pub fn sample_cleaned() -> String {
    crlf(&[
        "osu file format v14",
        "",
        "[General]",
        "AudioFilename: audio.mp3",
        "AudioLeadIn: 0",
        "PreviewTime: -1",
        "Countdown: 0",
        "SampleSet: Soft",
        "StackLeniency: 0.7",
        "Mode: 0",
        "LetterboxInBreaks: 0",
        "WidescreenStoryboard: 0",
        "",
        "[Editor]",
        "DistanceSpacing: 1.0",
        "BeatDivisor: 4",
        "GridSize: 32",
        "TimelineZoom: 1",
        "",
        "[Metadata]",
        "Title:Some Song",
        "TitleUnicode:Some Song",
        "Artist:Artist",
        "ArtistUnicode:Artist",
        "Creator:",
        "Version:",
        "Source:",
        "Tags:",
        "BeatmapID:0",
        "BeatmapSetID:-1",
        "",
        "[Difficulty]",
        "HPDrainRate:5",
        "CircleSize:5",
        "OverallDifficulty:5",
        "ApproachRate:5",
        "SliderMultiplier:1.4",
        "SliderTickRate:1",
        "",
        "[Events]",
        "//Background and Video events",
        "//Break Periods",
        "//Storyboard Layer 0 (Background)",
        "//Storyboard Layer 1 (Fail)",
        "//Storyboard Layer 2 (Pass)",
        "//Storyboard Layer 3 (Foreground)",
        "//Storyboard Layer 4 (Overlay)",
        "//Storyboard Sound Samples",
        "",
        "[TimingPoints]",
        "500,333.333333333333,4,0,0,100,1,0",
        "30000,300,4,0,0,100,1,0",
        "",
        "",
    ])
}

#[test]
fn cleans_sample_descriptor() {
    let output = rewrite(&sample_descriptor(), false);
    pretty_assertions::assert_eq!(output.text, sample_cleaned());
    assert!(output.warnings.is_empty());
    assert_eq!(output.background, None);
}
