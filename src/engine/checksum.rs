//! Módulo 11 check digits shared by CPF, legacy CNPJ and alphanumeric CNPJ.
//!
//! Every scheme derives a digit the same way: weighted sum, `r = sum % 11`,
//! digit is `0` when `r < 2`, otherwise `11 - r`. The second digit is always
//! computed over the body followed by the *computed* first digit.

pub const CPF_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
pub const CPF_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
pub const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
pub const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Derive one check digit from `values` weighted by `weights` (zipped, so the
/// shorter slice wins).
#[must_use]
pub fn check_digit(values: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = values.iter().zip(weights).map(|(&v, &w)| v * w).sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// Numeric value of a document character: `0-9` as themselves, `A-Z` as
/// `10..=35` (ASCII code minus 55). Lowercase is not accepted.
#[must_use]
pub fn char_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => c.to_digit(10),
        'A'..='Z' => Some(u32::from(c) - 55),
        _ => None,
    }
}

/// Map a cleaned document to its numeric values, or `None` on any foreign char.
#[must_use]
pub fn values_of(cleaned: &str) -> Option<Vec<u32>> {
    cleaned.chars().map(char_value).collect()
}

fn digit_pair(body: &[u32], first: &[u32], second: &[u32]) -> (u32, u32) {
    let d1 = check_digit(body, first);
    let mut extended = Vec::with_capacity(body.len() + 1);
    extended.extend_from_slice(body);
    extended.push(d1);
    let d2 = check_digit(&extended, second);
    (d1, d2)
}

/// Check digits for a 9-value CPF body.
#[must_use]
pub fn cpf_check_digits(body: &[u32]) -> (u32, u32) {
    digit_pair(body, &CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS)
}

/// Check digits for a 12-value CNPJ body (legacy or alphanumeric values).
#[must_use]
pub fn cnpj_check_digits(body: &[u32]) -> (u32, u32) {
    digit_pair(body, &CNPJ_FIRST_WEIGHTS, &CNPJ_SECOND_WEIGHTS)
}

/// Compare the trailing two values against the digits derived from the body.
#[must_use]
pub fn verify_cpf(values: &[u32]) -> bool {
    let [body @ .., c1, c2] = values else {
        return false;
    };
    body.len() == 9 && cpf_check_digits(body) == (*c1, *c2)
}

#[must_use]
pub fn verify_cnpj(values: &[u32]) -> bool {
    let [body @ .., c1, c2] = values else {
        return false;
    };
    body.len() == 12 && cnpj_check_digits(body) == (*c1, *c2)
}

fn digit_char(d: u32) -> char {
    char::from_digit(d, 10).unwrap_or('0')
}

/// Append both check digits to a 9-digit CPF base.
#[must_use]
pub fn complete_cpf(base: &str) -> Option<String> {
    if base.len() != 9 || !base.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (d1, d2) = cpf_check_digits(&values_of(base)?);
    Some(format!("{base}{}{}", digit_char(d1), digit_char(d2)))
}

/// Append both check digits to a 12-character CNPJ base. Uppercase letters are
/// allowed, which yields an alphanumeric CNPJ.
#[must_use]
pub fn complete_cnpj(base: &str) -> Option<String> {
    if base.len() != 12 {
        return None;
    }
    let (d1, d2) = cnpj_check_digits(&values_of(base)?);
    Some(format!("{base}{}{}", digit_char(d1), digit_char(d2)))
}
