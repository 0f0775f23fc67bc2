//! Fake text in the shapes the seed tables expect.

use fake::Fake;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;

/// Word count drifts up to 40% around the requested size, never below one.
fn word_range(nb_words: usize) -> std::ops::Range<usize> {
    let low = (nb_words * 60 / 100).max(1);
    let high = (nb_words * 140 / 100).max(low);
    low..high + 1
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A capitalized lorem sentence of roughly `nb_words` words, ending in a period.
pub fn title(nb_words: usize) -> String {
    let sentence: String = Sentence(word_range(nb_words)).fake();
    capitalize(&sentence)
}

/// Lorem sentences joined by spaces, never longer than `max_chars` characters.
///
/// Sentences are added until the next one would not fit. If even the first
/// sentence is too long, it is cut back word by word.
pub fn bounded_text(max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }

    let mut text = String::new();
    loop {
        let sentence = title(6);
        let needed = if text.is_empty() {
            sentence.chars().count()
        } else {
            text.chars().count() + 1 + sentence.chars().count()
        };

        if needed > max_chars {
            if text.is_empty() {
                text = fit_words(&sentence, max_chars);
            }
            break;
        }

        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&sentence);
    }

    text
}

/// Longest word prefix of `sentence` that fits in `max_chars` with a closing
/// period. Falls back to a hard character cut for a single oversized word.
fn fit_words(sentence: &str, max_chars: usize) -> String {
    let body = sentence.trim_end_matches('.');
    let mut fitted = String::new();

    for word in body.split_whitespace() {
        let candidate = if fitted.is_empty() {
            word.to_string()
        } else {
            format!("{fitted} {word}")
        };
        if candidate.chars().count() + 1 > max_chars {
            break;
        }
        fitted = candidate;
    }

    if fitted.is_empty() {
        return body.chars().take(max_chars).collect();
    }

    fitted.push('.');
    fitted
}

/// A fake full name.
pub fn person_name() -> String {
    Name().fake()
}
