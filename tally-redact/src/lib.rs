/// Replacement for every hidden character.
const MASK: char = '*';

/// Keep the first character and replace every following one with `*`.
///
/// Counts characters, not bytes, so `"🐶🪵"` becomes `"🐶*"`.
pub fn redact_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    std::iter::once(first)
        .chain(chars.map(|_| MASK))
        .collect()
}

/// Redact each space-separated word. Runs of spaces are kept as they are.
pub fn redact_phrase(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(redact_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Redact the part of an email address before the first `@`.
pub fn redact_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}@{}", redact_phrase(local), domain),
        None => redact_phrase(email),
    }
}

/// Star out the last four characters of the final `-`-separated group.
///
/// Groups shorter than four characters are starred completely.
pub fn redact_phone(phone: &str) -> String {
    let (head, last) = match phone.rsplit_once('-') {
        Some((head, last)) => (Some(head), last),
        None => (None, phone),
    };

    let kept = last.chars().count().saturating_sub(4);
    let masked: String = last
        .chars()
        .enumerate()
        .map(|(idx, ch)| if idx < kept { ch } else { MASK })
        .collect();

    match head {
        Some(head) => format!("{head}-{masked}"),
        None => masked,
    }
}
