//! Standard LRC format parser
//!
//! Supports `[mm:ss]text` and `[mm:ss.xx]text` with line-level synchronization.
//! A line may carry several timestamps, in which case the text is repeated
//! at every one of them.

/// A single timed lyric line
#[derive(Debug, Clone, PartialEq)]
pub struct LyricLine {
    /// Start time in seconds
    pub time: f64,
    /// Line text, trimmed
    pub text: String,
}

/// Parse a leading timestamp tag: `[mm:ss]` or `[mm:ss.f]` .. `[mm:ss.fff]`
///
/// Returns the number of bytes consumed and the time in milliseconds.
fn parse_time(src: &str) -> Option<(usize, u64)> {
    if !src.starts_with('[') {
        return None;
    }

    let end_bracket = src.find(']')?;
    let time_str = &src[1..end_bracket];

    let (min_str, rest) = time_str.split_once(':')?;
    let (sec_str, frac_str) = match rest.split_once('.') {
        Some((sec, frac)) => (sec, Some(frac)),
        None => (rest, None),
    };

    let min = parse_digits(min_str)?;
    let sec = parse_digits(sec_str)?;

    // Fraction is right-padded to milliseconds: .5 -> 500, .12 -> 120
    let ms = match frac_str {
        Some(frac) if (1..=3).contains(&frac.len()) => {
            let value = parse_digits(frac)?;
            value * 10u64.pow(3 - frac.len() as u32)
        }
        Some(_) => return None,
        None => 0,
    };

    let time_ms = min
        .checked_mul(60 * 1000)?
        .checked_add(sec.checked_mul(1000)?)?
        .checked_add(ms)?;

    Some((end_bracket + 1, time_ms))
}

/// Parse a non-empty run of ASCII digits
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse a single LRC line, which may have multiple timestamps
///
/// Every well-formed tag is taken, wherever it sits in the line, and removed
/// from the text. Brackets that are not timestamps stay in the text.
fn parse_line(line: &str) -> Vec<LyricLine> {
    let mut timestamps = Vec::new();
    let mut text = String::with_capacity(line.len());
    let mut rest = line.trim();

    while let Some(open) = rest.find('[') {
        text.push_str(&rest[..open]);
        match parse_time(&rest[open..]) {
            Some((consumed, time)) => {
                timestamps.push(time);
                rest = &rest[open + consumed..];
            }
            None => {
                text.push('[');
                rest = &rest[open + 1..];
            }
        }
    }
    text.push_str(rest);

    if timestamps.is_empty() {
        return Vec::new();
    }

    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    timestamps
        .into_iter()
        .map(|ms| LyricLine {
            time: ms as f64 / 1000.0,
            text: text.to_string(),
        })
        .collect()
}

/// Parse LRC content into lyric lines sorted by time
///
/// Lines without a valid leading timestamp (metadata tags such as `[ar:..]`,
/// plain text, malformed tags) or without text are skipped. The sort is
/// stable, so lines sharing a timestamp keep their input order.
pub fn parse_lrc(src: &str) -> Vec<LyricLine> {
    let mut result: Vec<LyricLine> = src.lines().flat_map(parse_line).collect();
    result.sort_by(|a, b| a.time.total_cmp(&b.time));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("[00:01.12]"), Some((10, 1120)));
        assert_eq!(parse_time("[00:10.254]"), Some((11, 10254)));
        assert_eq!(parse_time("[01:10.1]"), Some((9, 70100)));
        assert_eq!(parse_time("[00:00.00]"), Some((10, 0)));
        assert_eq!(parse_time("[02:03]"), Some((7, 123_000)));
    }

    #[test]
    fn test_parse_time_rejects_malformed() {
        assert_eq!(parse_time("[ar:Artist]"), None);
        assert_eq!(parse_time("[0a:10.00]"), None);
        assert_eq!(parse_time("[00:10.1234]"), None);
        assert_eq!(parse_time("[00:10.]"), None);
        assert_eq!(parse_time("[00-10]"), None);
        assert_eq!(parse_time("[00:10"), None);
        assert_eq!(parse_time("00:10]"), None);
    }

    #[test]
    fn test_parse_line() {
        let lines = parse_line("[00:01.12] test LyRiC");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].time, 1.12);
        assert_eq!(lines[0].text, "test LyRiC");
    }

    #[test]
    fn test_parse_multiple_timestamps() {
        let lines = parse_lrc("[00:01.00][00:05.00]Hello");
        assert_eq!(
            lines,
            vec![
                LyricLine {
                    time: 1.0,
                    text: "Hello".to_string()
                },
                LyricLine {
                    time: 5.0,
                    text: "Hello".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_tags_separated_by_whitespace() {
        let lines = parse_lrc("[00:01.00] [00:05.00]Hello");
        assert_eq!(lines.len(), 2);
        assert_eq!((lines[0].time, lines[0].text.as_str()), (1.0, "Hello"));
        assert_eq!((lines[1].time, lines[1].text.as_str()), (5.0, "Hello"));
    }

    #[test]
    fn test_trailing_tag_is_stripped_from_text() {
        let lines = parse_lrc("[00:01.00]Hello[00:05.00]");
        let parsed: Vec<(f64, &str)> = lines.iter().map(|l| (l.time, l.text.as_str())).collect();
        assert_eq!(parsed, [(1.0, "Hello"), (5.0, "Hello")]);
    }

    #[test]
    fn test_non_timestamp_brackets_stay_in_text() {
        let lines = parse_line("[00:02.00]Intro [live] mix");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Intro [live] mix");
    }

    #[test]
    fn test_fraction_is_right_padded() {
        let lines = parse_lrc("[00:02.5]X\n[00:03.12]Y\n[00:04.123]Z");
        assert_eq!(lines[0].time, 2.5);
        assert_eq!(lines[1].time, 3.12);
        assert_eq!(lines[2].time, 4.123);
    }

    #[test]
    fn test_skips_metadata_untimed_and_empty_lines() {
        let content = "[ti:Test Song]\n[ar:Test Artist]\nplain text\n[00:03.00]\n[00:04.00]   \n\n[00:05.00]Kept";
        let lines = parse_lrc(content);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Kept");
    }

    #[test]
    fn test_malformed_timestamp_does_not_panic() {
        let lines = parse_lrc(
            "[xx:yy]broken\n[99999999999999999999:00]overflow\n[9999999999999999:00]wraps\n[00:01]ok",
        );
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "ok");
    }

    #[test]
    fn test_sorted_with_stable_ties() {
        let content = "[00:10.00]Third\n[00:05.00]First\r\n[00:05.00]Second\n[00:01.00][00:20.00]Chorus";
        let lines = parse_lrc(content);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["Chorus", "First", "Second", "Third", "Chorus"]);
        assert!(lines.windows(2).all(|w| w[0].time <= w[1].time));
    }
}
