/// Keep ASCII digits only.
#[must_use]
pub fn clean_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Keep ASCII letters and digits, uppercasing letters.
#[must_use]
pub fn clean_alphanumeric(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[must_use]
pub fn has_letter(cleaned: &str) -> bool {
    cleaned.bytes().any(|b| b.is_ascii_alphabetic())
}

#[must_use]
pub fn is_all_digits(cleaned: &str) -> bool {
    cleaned.bytes().all(|b| b.is_ascii_digit())
}

/// True when every byte equals the first (e.g. `00000000000`).
#[must_use]
pub fn is_repeated_sequence(cleaned: &str) -> bool {
    let bytes = cleaned.as_bytes();
    bytes.first().is_some_and(|&first| bytes.iter().all(|&b| b == first))
}

/// Fill `pattern` with `chars`, where `#` takes the next char and anything
/// else is a literal. Literals are only emitted while input remains, so a
/// partial input gets the separators it has reached. Extra input is dropped.
#[must_use]
pub fn apply_mask(chars: &str, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut source = chars.chars().peekable();

    for slot in pattern.chars() {
        if source.peek().is_none() {
            break;
        }
        if slot == '#' {
            if let Some(c) = source.next() {
                out.push(c);
            }
        } else {
            out.push(slot);
        }
    }

    out
}
