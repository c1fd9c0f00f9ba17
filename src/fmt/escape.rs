//! Recognizes the color/erase directives already present in the input so they pass
//! through untouched: `ESC '[' digit+ (';' digit+){0,2} ('m' | 'K')`.

const ESC: u8 = 0x1b;

/// Parameters after the first one that a recognized sequence may carry.
const MAX_EXTRA_PARAMS: usize = 2;

/// Outcome of matching the grammar at the start of a byte slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Csi {
    /// A complete sequence of this many bytes.
    Match(usize),
    /// The whole slice is a valid prefix that more input could complete.
    Partial,
    /// The slice does not start with a recognized sequence.
    NoMatch,
}

/// Matches the grammar against the start of `input`.
#[must_use]
pub fn scan_csi(input: &[u8]) -> Csi {
    match input.first() {
        None => return Csi::Partial,
        Some(&ESC) => {}
        Some(_) => return Csi::NoMatch,
    }
    match input.get(1) {
        None => return Csi::Partial,
        Some(b'[') => {}
        Some(_) => return Csi::NoMatch,
    }

    let mut i = 2;
    let mut extra = 0;
    loop {
        let digits_start = i;
        while input.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        let Some(&next) = input.get(i) else {
            return Csi::Partial;
        };
        if i == digits_start {
            return Csi::NoMatch;
        }
        match next {
            b'm' | b'K' => return Csi::Match(i + 1),
            b';' if extra < MAX_EXTRA_PARAMS => {
                extra += 1;
                i += 1;
            }
            _ => return Csi::NoMatch,
        }
    }
}

/// Removes every recognized sequence, leaving the plain text behind.
#[must_use]
pub fn strip_escapes(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        if input[i] == ESC
            && let Csi::Match(len) = scan_csi(&input[i..])
        {
            i += len;
            continue;
        }
        out.push(input[i]);
        i += 1;
    }
    out
}
