//! Input validation for form fields.
//!
//! Every check is a total predicate: malformed input yields `false`,
//! never a panic. Lengths are counted in characters.

use tracing::debug;

pub const CREDENTIAL_MIN_LEN: usize = 5;
pub const CREDENTIAL_MAX_LEN: usize = 25;
pub const PHONE_NUMBER_LEN: usize = 12;
pub const MESSAGE_MIN_LEN: usize = 2;
pub const MESSAGE_MAX_LEN: usize = 150;
pub const SEARCH_TERMS_MIN_LEN: usize = 2;
pub const SEARCH_TERMS_MAX_LEN: usize = 150;
pub const ACTIVATION_KEY_LEN: usize = 20;

fn len_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// A single username or password: no `:` and 5 to 25 characters
pub fn credential_valid(value: &str) -> bool {
    if value.contains(':') {
        debug!("credential contains colon");
        return false;
    }
    if !len_between(value, CREDENTIAL_MIN_LEN, CREDENTIAL_MAX_LEN) {
        debug!("credential length out of range");
        return false;
    }
    true
}

/// Both halves of a username/password pair are well formed
pub fn credentials_valid(username: &str, password: &str) -> bool {
    credential_valid(username) && credential_valid(password)
}

/// `+1` followed by exactly ten ASCII digits
pub fn phone_number_valid(pn: &str) -> bool {
    let bytes = pn.as_bytes();
    if bytes.len() != PHONE_NUMBER_LEN {
        debug!("phone number not {} chars long", PHONE_NUMBER_LEN);
        return false;
    }
    if bytes[0] != b'+' || bytes[1] != b'1' {
        debug!("phone number does not start with +1");
        return false;
    }
    if !bytes[2..].iter().all(u8::is_ascii_digit) {
        debug!("phone number has non-digit characters");
        return false;
    }
    true
}

pub fn message_valid(msg: &str) -> bool {
    len_between(msg, MESSAGE_MIN_LEN, MESSAGE_MAX_LEN)
}

/// Length check on the comma separated form only; empty terms after
/// splitting (e.g. a trailing comma) are accepted.
pub fn search_terms_valid(terms: &str) -> bool {
    len_between(terms, SEARCH_TERMS_MIN_LEN, SEARCH_TERMS_MAX_LEN)
}

pub fn activation_key_valid(key: &str) -> bool {
    key.chars().count() == ACTIVATION_KEY_LEN
}

pub fn passwords_match(p1: &str, p2: &str) -> bool {
    p1 == p2
}
