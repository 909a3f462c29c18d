use rowan::TextSize;

use super::{LineIndex, Point};

fn point(text: &str, offset: u32) -> Point {
    LineIndex::new(text).point(TextSize::from(offset))
}

#[test]
fn offsets_on_first_line() {
    assert_eq!(point("abc\ndef\n", 0), Point::new(0, 0));
    assert_eq!(point("abc\ndef\n", 2), Point::new(0, 2));
}

#[test]
fn newline_belongs_to_its_line() {
    assert_eq!(point("abc\ndef\n", 3), Point::new(0, 3));
    assert_eq!(point("abc\ndef\n", 4), Point::new(1, 0));
    assert_eq!(point("abc\ndef\n", 6), Point::new(1, 2));
}

#[test]
fn crlf_counts_as_one_break() {
    assert_eq!(point("a\r\nb", 1), Point::new(0, 1));
    assert_eq!(point("a\r\nb", 3), Point::new(1, 0));
}

#[test]
fn offset_past_end_is_clamped() {
    assert_eq!(point("abc\ndef\n", 100), Point::new(2, 0));
    assert_eq!(point("", 5), Point::new(0, 0));
}

#[test]
fn line_count() {
    assert_eq!(LineIndex::new("").line_count(), 1);
    assert_eq!(LineIndex::new("a\nb").line_count(), 2);
    assert_eq!(LineIndex::new("a\nb\n").line_count(), 3);
}

#[test]
fn display_is_one_based() {
    insta::assert_snapshot!(Point::new(0, 4).to_string(), @"1:5");
    insta::assert_snapshot!(Point::new(9, 0).to_string(), @"10:1");
}
