use osz_cleaner::descriptor::timing::parse_leading_int;
use pretty_assertions::assert_eq;

use super::{crlf, rewrite};

fn timing_section(records: &[&str]) -> Vec<String> {
    let mut lines = vec!["[TimingPoints]"];
    lines.extend_from_slice(records);
    lines.push("[Colours]");
    let text = rewrite(&crlf(&lines), false).text;
    text.split("\r\n")
        .skip(1)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn falsy_uninherited_records_removed() {
    let kept = timing_section(&[
        "0,500,4,0,0,100,0,0",
        "0,500,4,0,0,100,abc,0",
        "0,500,4,0,0,100,0.7,0",
        "0,500,4,0,0,100,,0",
        "0,500,4,0,0,100,1,0",
    ]);
    assert_eq!(kept, vec!["0,500,4,0,0,100,1,0"]);
}

#[test]
fn truthy_records_kept_with_only_clamped_fields_changed() {
    let records = [
        "12,345.6,3,2,7,20,1,8",
        "100,-1,7,0,0,100,2,0",
        "200,250,4,-1,-2,150,-1,-4",
    ];
    let kept = timing_section(&records);
    assert_eq!(kept.len(), records.len());

    for (before, after) in records.iter().zip(&kept) {
        let before: Vec<_> = before.split(',').collect();
        let after: Vec<_> = after.split(',').collect();
        assert_eq!(before.len(), after.len());
        for (i, (b, a)) in before.iter().zip(&after).enumerate() {
            let (b_num, a_num) = (parse_leading_int(b).unwrap(), parse_leading_int(a).unwrap());
            match i {
                3 | 4 | 7 => assert_eq!(a_num, b_num.min(0)),
                5 => assert_eq!(a_num, b_num.max(100)),
                _ => assert_eq!(a, b),
            }
        }
    }
}

#[test]
fn short_records_pass_through() {
    let kept = timing_section(&["1000,500", "2000,-100,4,1"]);
    assert_eq!(kept, vec!["1000,500", "2000,-100,4,1"]);
}

#[test]
fn non_record_lines_pass_through() {
    let kept = timing_section(&["// timing", "0,500,4,0,0,100,1,0"]);
    assert_eq!(kept, vec!["// timing", "0,500,4,0,0,100,1,0"]);
}
