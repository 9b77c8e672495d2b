//! Bijective base-26 letter runs.
//!
//! Letter components count `a, b, …, z, aa, ab, …, zz, aaa, …`. Each letter is
//! a base-26 digit with value 1-26 (`a` = 1, `z` = 26), and the run's value
//! minus one is the zero-based index. There is no zero digit, so every index
//! has exactly one spelling.
//!
//! Coordinates never need more than two letters (index 255 is `iv`), but the
//! functions here handle runs of any length.
//!
//! # Examples
//!
//! ```
//! use cellcoord_core::alphabet::{LetterCase, decode_letters, encode_letters};
//!
//! assert_eq!(decode_letters(b"aa"), Some(26));
//! assert_eq!(decode_letters(b"IV"), Some(255));
//! assert_eq!(encode_letters(701, LetterCase::Lower), "zz");
//! assert_eq!(encode_letters(702, LetterCase::Upper), "AAA");
//! ```

use std::fmt;

const RADIX: u64 = 26;

// Letters needed to spell `u64::MAX`.
const MAX_LETTERS: usize = 14;

/// Case of a spelled-out letter run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    /// `a`-`z`.
    #[default]
    Lower,
    /// `A`-`Z`.
    Upper,
}

impl LetterCase {
    const fn base(self) -> u8 {
        match self {
            Self::Lower => b'a',
            Self::Upper => b'A',
        }
    }
}

/// Decodes an ASCII letter run into its zero-based index.
///
/// Upper and lower case letters are accepted and may even be mixed; the
/// caller decides which case a component requires.
///
/// Returns `None` if `run` is empty, contains a byte that is not an ASCII
/// letter, or spells a value that does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use cellcoord_core::alphabet::decode_letters;
///
/// assert_eq!(decode_letters(b"a"), Some(0));
/// assert_eq!(decode_letters(b"z"), Some(25));
/// assert_eq!(decode_letters(b"iw"), Some(256));
/// assert_eq!(decode_letters(b""), None);
/// assert_eq!(decode_letters(b"a1"), None);
/// ```
#[must_use]
pub fn decode_letters(run: &[u8]) -> Option<u64> {
    if run.is_empty() {
        return None;
    }
    // One past `u64::MAX` is a valid intermediate, so accumulate wider.
    let value = run.iter().try_fold(0_u128, |acc, &byte| {
        if !byte.is_ascii_alphabetic() {
            return None;
        }
        let digit = u128::from(byte.to_ascii_lowercase() - b'a') + 1;
        acc.checked_mul(u128::from(RADIX))?.checked_add(digit)
    })?;
    u64::try_from(value - 1).ok()
}

/// Writes the letter run of `index` into `out`.
///
/// # Errors
///
/// Returns an error only if `out` fails to accept the text.
pub fn write_letters<W>(out: &mut W, index: u64, case: LetterCase) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    let mut letters = [0_u8; MAX_LETTERS];
    let mut start = letters.len();
    let mut value = index;
    loop {
        start -= 1;
        let digit = (value % RADIX) as u8;
        letters[start] = case.base() + digit;
        value /= RADIX;
        if value == 0 {
            break;
        }
        value -= 1;
    }
    letters[start..]
        .iter()
        .try_for_each(|&letter| out.write_char(char::from(letter)))
}

/// Spells `index` as a letter run.
///
/// # Examples
///
/// ```
/// use cellcoord_core::alphabet::{LetterCase, encode_letters};
///
/// assert_eq!(encode_letters(0, LetterCase::Lower), "a");
/// assert_eq!(encode_letters(25, LetterCase::Lower), "z");
/// assert_eq!(encode_letters(26, LetterCase::Lower), "aa");
/// assert_eq!(encode_letters(255, LetterCase::Upper), "IV");
/// ```
#[must_use]
pub fn encode_letters(index: u64, case: LetterCase) -> String {
    Letters { index, case }.to_string()
}

struct Letters {
    index: u64,
    case: LetterCase,
}

impl fmt::Display for Letters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_letters(f, self.index, self.case)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_single_letters() {
        for (index, letter) in (0_u64..).zip(b'a'..=b'z') {
            assert_eq!(decode_letters(&[letter]), Some(index));
            assert_eq!(decode_letters(&[letter.to_ascii_uppercase()]), Some(index));
            assert_eq!(
                encode_letters(index, LetterCase::Lower),
                char::from(letter).to_string()
            );
        }
    }

    #[test]
    fn test_length_boundaries() {
        let cases = [
            (25, "z"),
            (26, "aa"),
            (27, "ab"),
            (51, "az"),
            (52, "ba"),
            (255, "iv"),
            (256, "iw"),
            (701, "zz"),
            (702, "aaa"),
            (703, "aab"),
            (18_277, "zzz"),
            (18_278, "aaaa"),
        ];
        for (index, letters) in cases {
            assert_eq!(encode_letters(index, LetterCase::Lower), letters);
            assert_eq!(
                encode_letters(index, LetterCase::Upper),
                letters.to_ascii_uppercase()
            );
            assert_eq!(decode_letters(letters.as_bytes()), Some(index));
            assert_eq!(
                decode_letters(letters.to_ascii_uppercase().as_bytes()),
                Some(index)
            );
        }
    }

    #[test]
    fn test_u64_extremes() {
        let max = encode_letters(u64::MAX, LetterCase::Lower);
        assert!(max.len() <= MAX_LETTERS);
        assert_eq!(decode_letters(max.as_bytes()), Some(u64::MAX));

        // One more than `u64::MAX` does not fit.
        let mut overflow = max.into_bytes();
        let last = overflow.len() - 1;
        overflow[last] += 1;
        assert_eq!(decode_letters(&overflow), None);
        assert_eq!(decode_letters(&[b'z'; 20]), None);
    }

    #[test]
    fn test_encode_matches_write_letters() {
        for index in [0, 25, 26, 255, 18_278, u64::MAX] {
            for case in [LetterCase::Lower, LetterCase::Upper] {
                let mut written = String::from(">");
                write_letters(&mut written, index, case).unwrap();
                assert_eq!(written[1..], encode_letters(index, case));
            }
        }
        assert_eq!(encode_letters(u64::MAX, LetterCase::Upper), "GKGWBYLWRXTLPP");
    }

    #[test]
    fn test_rejects_non_letters() {
        assert_eq!(decode_letters(b""), None);
        assert_eq!(decode_letters(b"1"), None);
        assert_eq!(decode_letters(b"a-"), None);
        assert_eq!(decode_letters("é".as_bytes()), None);
    }

    proptest! {
        #[test]
        fn encode_then_decode_is_identity(index in any::<u64>()) {
            let letters = encode_letters(index, LetterCase::Lower);
            prop_assert!(letters.bytes().all(|b| b.is_ascii_lowercase()));
            prop_assert_eq!(decode_letters(letters.as_bytes()), Some(index));
        }

        #[test]
        fn decode_then_encode_is_identity(letters in "[a-z]{1,12}") {
            let index = decode_letters(letters.as_bytes()).unwrap();
            prop_assert_eq!(encode_letters(index, LetterCase::Lower), letters);
        }

        #[test]
        fn longer_runs_spell_larger_indices(a in any::<u32>(), b in any::<u32>()) {
            let (a, b) = (u64::from(a), u64::from(b));
            let la = encode_letters(a, LetterCase::Lower);
            let lb = encode_letters(b, LetterCase::Lower);
            if la.len() < lb.len() {
                prop_assert!(a < b);
            }
        }
    }
}
