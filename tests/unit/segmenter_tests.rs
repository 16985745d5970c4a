/*!
 * Tests for record segmentation
 */

use mantra_translit::transliteration::{segment, segment_with_report, Record};
use crate::common;

/// Empty input yields no records
#[test]
fn test_segment_withEmptyInput_shouldReturnNoRecords() {
    assert!(segment("").is_empty());
    assert!(segment("\n\n   \n").is_empty());
}

/// Content lines are joined with single spaces under their title
#[test]
fn test_segment_withTwoRecords_shouldJoinBodyLines() {
    let records = segment("M1.1 A\nline one\nline two\nM1.2 B\nline three");

    assert_eq!(
        records,
        vec![
            Record::new("M1.1 A", "line one line two"),
            Record::new("M1.2 B", "line three"),
        ]
    );
}

/// A title directly followed by another title is dropped
#[test]
fn test_segment_withTitleWithoutContent_shouldDropIt() {
    let records = segment("M1.1 A\nM1.2 B\ncontent");

    assert_eq!(records, vec![Record::new("M1.2 B", "content")]);
}

/// A trailing title with nothing after it is dropped
#[test]
fn test_segment_withTrailingTitle_shouldDropIt() {
    let records = segment("M1.1 A\nfoo\nM1.2 B\n\n");

    assert_eq!(records, vec![Record::new("M1.1 A", "foo")]);
}

/// Lines before the first title are discarded
#[test]
fn test_segment_withStrayPrefix_shouldDiscardIt() {
    let records = segment("stray\nM1.1 A\nfoo");

    assert_eq!(records, vec![Record::new("M1.1 A", "foo")]);
}

/// Blank lines and surrounding whitespace do not reach the body
#[test]
fn test_segment_withPaddedLines_shouldTrimEachLine() {
    let records = segment("   M3.14 padded title  \n\n\t oṃ  \n\n  svāhā\t\n");

    assert_eq!(records, vec![Record::new("M3.14 padded title", "oṃ svāhā")]);
}

/// Duplicate titles produce independent records
#[test]
fn test_segment_withDuplicateTitles_shouldKeepBoth() {
    let records = segment("M1.1 same\na\nM1.1 same\nb");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].body, "a");
    assert_eq!(records[1].body, "b");
}

/// Lines that only resemble titles are treated as content
#[test]
fn test_segment_withNearMissTitles_shouldTreatThemAsContent() {
    let records = segment("M1.1 real\nM1 not a title\nxM2.2 not either\nM.3 nope");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].body, "M1 not a title xM2.2 not either M.3 nope");
}

/// Record count equals the number of titles that have content
#[test]
fn test_segment_withMixedInput_shouldCountOnlyTitlesWithContent() {
    let input = "M1.1 a\nx\nM1.2 b\nM1.3 c\ny\nz\nM1.4 d\n";
    let records = segment(input);

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["M1.1 a", "M1.3 c"]);
}

/// The sample file parses into its two mantras
#[test]
fn test_segment_withSampleMantras_shouldParseBoth() {
    let records = segment(common::SAMPLE_MANTRAS);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "M1.1 第一个陀罗尼");
    assert!(records[0].body.starts_with("namaḥ sarva"));
    assert!(records[1].body.ends_with("hūṃ phaṭ svāhā"));
}

/// The report lists what was discarded
#[test]
fn test_segment_with_report_withLossyInput_shouldReportDrops() {
    let report = segment_with_report("preface\nmore preface\nM1.1 empty\nM1.2 full\noṃ\nM1.3 tail");

    assert_eq!(report.records, vec![Record::new("M1.2 full", "oṃ")]);
    assert_eq!(report.dropped_titles, vec!["M1.1 empty", "M1.3 tail"]);
    assert_eq!(report.stray_lines, 2);
    assert!(!report.is_lossless());
}

/// Well-formed input is reported as lossless
#[test]
fn test_segment_with_report_withCleanInput_shouldBeLossless() {
    let report = segment_with_report(common::SAMPLE_MANTRAS);

    assert!(report.is_lossless());
    assert_eq!(report.records, segment(common::SAMPLE_MANTRAS));
}

/// Old Mac-style line endings split lines like any other
#[test]
fn test_segment_withCrOnlyLineEndings_shouldSplitRecords() {
    let records = segment("M1.1 A\roṃ\rM1.2 B\rhūṃ\r");

    assert_eq!(
        records,
        vec![Record::new("M1.1 A", "oṃ"), Record::new("M1.2 B", "hūṃ")]
    );
}

/// A byte order mark before the first title keeps the first record
#[test]
fn test_segment_withLeadingBom_shouldKeepFirstRecord() {
    let with_bom = format!("\u{feff}{}", common::SAMPLE_MANTRAS);
    let report = segment_with_report(&with_bom);

    assert_eq!(report.records, segment(common::SAMPLE_MANTRAS));
    assert!(report.is_lossless());
}
