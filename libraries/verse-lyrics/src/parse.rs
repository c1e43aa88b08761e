//! LRC timed-text parsing

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Time tag of the form `[mm:ss]`, `[mm:ss.xx]`, or `[mm:ss.xxx]`.
static TIME_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d{2}):(\d{2})\.?(\d{2,3})?\]").expect("time tag pattern"));

/// One timestamped lyric line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LyricLine {
    /// Timestamp in seconds from the start of the track
    pub time: f64,

    /// Lyric text with all time tags stripped
    pub text: String,
}

/// Parse LRC source into lyric lines sorted ascending by timestamp.
///
/// Each physical line is scanned for time tags; the text left after
/// stripping every tag is paired with each tag's timestamp, so a line with
/// three tags yields three entries. A two-digit fraction is hundredths of a
/// second, a three-digit fraction thousandths. Lines without tags are
/// dropped. The sort is stable, so entries sharing a timestamp keep the
/// order they were encountered in.
pub fn parse_lrc(source: &str) -> Vec<LyricLine> {
    let mut lines = Vec::new();

    for raw in source.lines() {
        let mut times = Vec::new();
        for caps in TIME_TAG.captures_iter(raw) {
            let minutes: f64 = caps[1].parse().unwrap_or(0.0);
            let seconds: f64 = caps[2].parse().unwrap_or(0.0);
            let fraction = caps.get(3).map_or(0.0, |m| {
                let digits = m.as_str();
                let value: f64 = digits.parse().unwrap_or(0.0);
                if digits.len() == 2 {
                    value / 100.0
                } else {
                    value / 1000.0
                }
            });
            times.push(minutes * 60.0 + seconds + fraction);
        }

        if times.is_empty() {
            continue;
        }

        let text = TIME_TAG.replace_all(raw, "").trim().to_string();
        for time in times {
            lines.push(LyricLine {
                time,
                text: text.clone(),
            });
        }
    }

    lines.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_lrc() {
        let lrc = "[00:00.00]first\n[00:05.00]second\n[00:10.00]third";
        let lines = parse_lrc(lrc);

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            LyricLine {
                time: 0.0,
                text: "first".to_string()
            }
        );
        assert_eq!(lines[1].time, 5.0);
        assert_eq!(lines[2].time, 10.0);
        assert_eq!(lines[2].text, "third");
    }

    #[test]
    fn two_digit_fraction_is_hundredths() {
        let lines = parse_lrc("[00:05.50]x");
        assert_eq!(lines[0].time, 5.5);
    }

    #[test]
    fn three_digit_fraction_is_thousandths() {
        let lines = parse_lrc("[00:05.500]x\n[00:01.007]y");
        assert_eq!(lines[0].time, 1.007);
        assert_eq!(lines[1].time, 5.5);
    }

    #[test]
    fn tag_without_fraction() {
        let lines = parse_lrc("[01:05]x");
        assert_eq!(lines[0].time, 65.0);
    }

    #[test]
    fn multi_tag_line_yields_one_entry_per_tag() {
        let lines = parse_lrc("[00:05.00][00:10.00]repeated");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].time, 5.0);
        assert_eq!(lines[1].time, 10.0);
        assert_eq!(lines[0].text, "repeated");
        assert_eq!(lines[1].text, "repeated");
    }

    #[test]
    fn output_is_sorted_by_time() {
        let lines = parse_lrc("[00:10.00]b\n[00:00.00]a\n[00:05.00]middle");
        assert_eq!(lines[0].time, 0.0);
        assert_eq!(lines[1].time, 5.0);
        assert_eq!(lines[2].time, 10.0);
        assert_eq!(lines[0].text, "a");
    }

    #[test]
    fn untagged_lines_are_dropped() {
        let lines = parse_lrc("[00:00.00]a\nplain text\n[00:05.00]b");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn duplicate_timestamps_keep_encounter_order() {
        let lines = parse_lrc("[00:05.00]first\n[00:05.00]second");
        assert_eq!(lines[0].text, "first");
        assert_eq!(lines[1].text, "second");
    }

    #[test]
    fn empty_source_yields_no_lines() {
        assert!(parse_lrc("").is_empty());
        assert!(parse_lrc("no tags here\nat all").is_empty());
    }

    #[test]
    fn metadata_tags_are_not_time_tags() {
        // [ar:...] / [ti:...] headers common in LRC files
        let lines = parse_lrc("[ar:Artist]\n[ti:Title]\n[00:00.00]first");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "first");
    }
}
