use crate::sections::SectionData;
use crate::summary::{SectionSummary, summarize};
use pretty_assertions::assert_eq;

#[test]
fn mean_and_inverse_transform() {
    // Arrange
    let section = SectionData::new("A", vec![0.0, 1.0, 2.0]);

    // Act
    let summary = SectionSummary::compute(&section);

    // Assert
    assert_eq!(summary.label, "A");
    assert_eq!(summary.count, 3);
    assert_eq!(summary.mean_log10, Some(1.0));
    assert!((summary.geometric_mean.unwrap() - 10.0).abs() < 1e-9);
    assert_eq!(summary.min_log10, Some(0.0));
    assert_eq!(summary.max_log10, Some(2.0));
}

#[test]
fn empty_section_has_no_statistics() {
    let summary = SectionSummary::compute(&SectionData::new("empty", vec![]));

    assert_eq!(summary.count, 0);
    assert_eq!(summary.mean_log10, None);
    assert_eq!(summary.geometric_mean, None);
    assert_eq!(summary.min_log10, None);
    assert_eq!(summary.max_log10, None);
}

#[test]
fn summarize_keeps_section_order() {
    let sections = vec![
        SectionData::new("b", vec![1.0]),
        SectionData::new("a", vec![2.0]),
    ];

    let summaries = summarize(&sections);

    let labels: Vec<_> = summaries.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["b", "a"]);
}
