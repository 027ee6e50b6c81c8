use envo_bot::{Feedback, FeedbackRow, Word};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

#[test]
fn test_all_hit() {
    let row = FeedbackRow::calculate(&w("crane"), &w("crane"));
    assert!(row.is_solved());
    assert_eq!(row, FeedbackRow::ALL_HIT);
}

#[test]
fn test_all_absent() {
    let row = FeedbackRow::calculate(&w("quick"), &w("dream"));
    assert_eq!(row, FeedbackRow::new([Feedback::Absent; 5]));
}

#[test]
fn test_mixed_feedback() {
    let feedbacks = FeedbackRow::calculate(&w("crane"), &w("charm")).to_feedbacks();
    assert_eq!(
        feedbacks,
        [
            Feedback::Hit,
            Feedback::Present,
            Feedback::Hit,
            Feedback::Absent,
            Feedback::Absent
        ]
    );
}

#[test]
fn test_duplicate_letters_in_guess() {
    let feedbacks = FeedbackRow::calculate(&w("speed"), &w("creep")).to_feedbacks();
    assert_eq!(feedbacks[0], Feedback::Absent);
    assert_eq!(feedbacks[1], Feedback::Present);
    assert_eq!(feedbacks[2], Feedback::Hit);
    assert_eq!(feedbacks[3], Feedback::Hit);
    assert_eq!(feedbacks[4], Feedback::Absent);
}

#[test]
fn test_duplicate_guess_limited_secret() {
    let feedbacks = FeedbackRow::calculate(&w("geese"), &w("creep")).to_feedbacks();
    assert_eq!(feedbacks[0], Feedback::Absent);
    assert_eq!(feedbacks[1], Feedback::Present);
    assert_eq!(feedbacks[2], Feedback::Hit);
    assert_eq!(feedbacks[3], Feedback::Absent);
    assert_eq!(feedbacks[4], Feedback::Absent);
}

#[test]
fn test_loyal_against_alloy() {
    let feedbacks = FeedbackRow::calculate(&w("loyal"), &w("alloy")).to_feedbacks();
    assert_eq!(feedbacks, [Feedback::Present; 5]);
}

#[test]
fn test_row_parse_shorthand() {
    let row = FeedbackRow::parse("gybbr").unwrap();
    assert_eq!(
        row.to_feedbacks(),
        [
            Feedback::Hit,
            Feedback::Present,
            Feedback::Absent,
            Feedback::Absent,
            Feedback::Absent
        ]
    );
    assert_eq!(FeedbackRow::parse("21000"), Some(row));
    assert_eq!(FeedbackRow::parse("🟩🟨🟥🟥🟥"), Some(row));
}

#[test]
fn test_row_parse_invalid() {
    assert!(FeedbackRow::parse("gybbb1").is_none());
    assert!(FeedbackRow::parse("gybb").is_none());
    assert!(FeedbackRow::parse("gybzb").is_none());
}

#[test]
fn test_glyph_rows_reject_shorthand() {
    assert!(FeedbackRow::from_glyphs("gybbb").is_none());
    assert!(FeedbackRow::from_glyphs("🟩🟨🟥🟥").is_none());
    assert!(FeedbackRow::from_glyphs("🟩🟨⬛🟥🟥").is_none());
    assert!(FeedbackRow::from_glyphs("🟩🟨🟥🟥🟥").is_some());
}

#[test]
fn test_glyph_display() {
    let row = FeedbackRow::new([
        Feedback::Hit,
        Feedback::Present,
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Hit,
    ]);
    assert_eq!(row.to_glyphs(), "🟩🟨🟥🟥🟩");
    assert_eq!(FeedbackRow::from_glyphs(&row.to_string()), Some(row));
}
