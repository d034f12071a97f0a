use pretty_assertions::assert_eq;

use super::{crlf, rewrite, sample_descriptor};

fn assert_stable(source: &str, preserve_background: bool) {
    let once = rewrite(source, preserve_background);
    let twice = rewrite(&once.text, preserve_background);
    assert_eq!(twice.text, once.text);
    if preserve_background {
        assert_eq!(
            twice.background.map(|bg| bg.declaration),
            once.background.map(|bg| bg.declaration)
        );
    }
}

#[test]
fn sample_is_stable() {
    assert_stable(&sample_descriptor(), false);
    assert_stable(&sample_descriptor(), true);
}

#[test]
fn lf_source_is_stable() {
    let source = sample_descriptor().replace("\r\n", "\n");
    assert_stable(&source, false);
    assert_stable(&source, true);
}

#[test]
fn unresolved_audio_is_stable() {
    let source = crlf(&["[General]", "AudioFilename: track.wav", "[Events]", "[TimingPoints]"]);
    let once = rewrite(&source, false);
    assert_eq!(once.warnings.len(), 1);
    assert!(once.text.contains("AudioFilename: track.wav"));
    assert_stable(&source, false);
}

#[test]
fn degenerate_inputs_are_stable() {
    for source in ["", "\r\n", "[Events]", "[HitObjects]\r\n1,2,3", "osu file format v14"] {
        assert_stable(source, false);
        assert_stable(source, true);
    }
}
