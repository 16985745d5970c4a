/*!
 * Splits a flat mantra text into titled records.
 *
 * A title line starts with `M<digits>.<digits>` (e.g. `M1.2 Heart dharani`);
 * every following non-empty line up to the next title belongs to its body.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Title lines such as `M12.3` followed by any descriptive text
static TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M\d+\.\d+").expect("title pattern is valid")
});

/// Line breaks in any convention: `\r\n`, `\n` or a lone `\r`
static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid")
});

/// Byte order mark some editors put at the start of UTF-8 files
const BOM: char = '\u{feff}';

/// One titled unit of source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Full title line, including trailing description
    pub title: String,
    /// Content lines joined with single spaces
    pub body: String,
}

impl Record {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Records produced by one pass, plus what the pass discarded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentReport {
    /// Records in input order
    pub records: Vec<Record>,
    /// Titles that were never followed by content
    pub dropped_titles: Vec<String>,
    /// Content lines that appeared before the first title
    pub stray_lines: usize,
}

impl SegmentReport {
    /// True when nothing in the input was discarded
    pub fn is_lossless(&self) -> bool {
        self.dropped_titles.is_empty() && self.stray_lines == 0
    }
}

/// Check whether a trimmed line opens a new record
pub fn is_title_line(line: &str) -> bool {
    TITLE_REGEX.is_match(line)
}

/// Split `text` into records. Titles without content and content
/// before the first title are discarded.
pub fn segment(text: &str) -> Vec<Record> {
    segment_with_report(text).records
}

/// Same as [`segment`], but also reports the discarded input
pub fn segment_with_report(text: &str) -> SegmentReport {
    let mut report = SegmentReport::default();
    let mut current_title = String::new();
    let mut current_body = String::new();

    let text = text.strip_prefix(BOM).unwrap_or(text);

    for line in LINE_BREAK_REGEX.split(text) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if is_title_line(line) {
            flush(&mut report, &current_title, &mut current_body);
            current_title = line.to_string();
        } else {
            if current_title.is_empty() {
                report.stray_lines += 1;
            }
            current_body.push(' ');
            current_body.push_str(line);
        }
    }

    flush(&mut report, &current_title, &mut current_body);

    report
}

// Emits the pending record, or notes the title as dropped when it has no body
fn flush(report: &mut SegmentReport, title: &str, body: &mut String) {
    if title.is_empty() {
        // Pre-title content is never attached to the first title
        body.clear();
        return;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        report.dropped_titles.push(title.to_string());
    } else {
        report.records.push(Record::new(title, trimmed));
    }
    body.clear();
}
