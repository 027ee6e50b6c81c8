use envo_bot::dictionary::WordError;
use envo_bot::{transcript, Dictionary, Feedback, FeedbackRow, Guess, Word};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

#[test]
fn test_word_parse() {
    assert_eq!(w("crane").as_str(), "CRANE");
    assert_eq!(w("CrAnE"), w("CRANE"));
    assert_eq!(Word::parse("cran"), Err(WordError::Length(4)));
    assert_eq!(Word::parse("cranes"), Err(WordError::Length(6)));
    assert_eq!(Word::parse("cr4ne"), Err(WordError::NotAlphabetic('4')));
    assert_eq!(w("alloy").count(b'L'), 2);
    assert_eq!("slate".parse::<Word>(), Ok(w("SLATE")));
}

#[test]
fn test_dictionary_is_tolerant() {
    let dictionary = Dictionary::from_tokens(["crane", "CRANE", " crate ", "", "WARN", "WESTERN", "AB1DE"]);
    assert_eq!(dictionary.len(), 2);
    assert!(dictionary.contains(&w("CRANE")));
    assert!(dictionary.contains(&w("CRATE")));
}

#[test]
fn test_embedded_dictionary_drops_malformed_entries() {
    let dictionary = Dictionary::embedded();
    assert!(dictionary.len() > 600);
    assert!(dictionary.contains(&w("AROMA")));
    assert!(dictionary.contains(&w("ALLOY")));
    assert!(dictionary
        .all_words()
        .all(|word| word.letters().iter().all(u8::is_ascii_uppercase)));
    let words: Vec<_> = dictionary.all_words().collect();
    assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_parse_line() {
    let guess = Guess::parse_line("🟩🟨🟥🟥🟥 crane").unwrap();
    assert_eq!(guess.word, w("CRANE"));
    assert_eq!(
        guess.feedback.to_feedbacks(),
        [
            Feedback::Hit,
            Feedback::Present,
            Feedback::Absent,
            Feedback::Absent,
            Feedback::Absent
        ]
    );
    assert_eq!(guess.to_string(), "🟩🟨🟥🟥🟥 CRANE");
}

#[test]
fn test_parse_skips_malformed_lines() {
    let text = "\
🟩🟨🟥🟥🟥 CRANE
🟩🟨🟥🟥 CRANE
🟩🟨🟥🟥🟥🟥 CRANE
🟩🟨🟥🟥🟥 CRANES
🟩🟨🟥🟥🟥
🟩🟨⬜🟥🟥 CRANE
gybbb CRANE

   🟥🟥🟥🟥🟩 alloy  ";
    let guesses = transcript::parse(text);
    assert_eq!(
        guesses,
        vec![
            Guess::new(w("CRANE"), FeedbackRow::parse("gybbb").unwrap()),
            Guess::new(w("ALLOY"), FeedbackRow::parse("bbbbg").unwrap()),
        ]
    );
}

#[test]
fn test_parse_keeps_order() {
    let guesses = transcript::parse("🟥🟥🟥🟥🟥 THREE\n🟨🟥🟥🟨🟥 AROMA");
    let order: Vec<_> = guesses.iter().map(|g| g.word.as_str().to_string()).collect();
    assert_eq!(order, ["THREE", "AROMA"]);
}

#[test]
fn test_parse_empty() {
    assert!(transcript::parse("").is_empty());
    assert!(transcript::parse("\n\n  \n").is_empty());
}
