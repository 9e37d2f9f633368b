//! Alphabets and the radix/alphabet validation rules.

use crate::error::{ConfigError, DomainError};
use crate::result::Result;

/// Used whenever no custom alphabet is supplied. Digit values 10 to 35
/// map to the lower-case letters and 36 to 61 to the upper-case letters.
pub(crate) const DEFAULT_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The largest radix the algorithm accepts.
pub(crate) const MAX_RADIX: usize = 1 << 16;

#[derive(Debug)]
struct Letter {
    val: char,
    pos: usize,
}

/// An ordered sequence of distinct characters. The position of a character
/// within the alphabet is its numeral value.
#[derive(Debug)]
pub struct Alphabet {
    by_pos: Vec<char>,
    by_ltr: Vec<Letter>,
}

impl Alphabet {
    /// Resolve an optional radix and an optional alphabet into a usable
    /// alphabet.
    ///
    /// When both are supplied their sizes must agree. A radix alone
    /// selects a prefix of the default alphabet, capping it at 62; an
    /// alphabet alone implies its length as the radix. With neither, the
    /// cipher operates on the decimal digits.
    pub fn normalize(
        opt_radix: Option<usize>,
        opt_s: Option<&str>,
    ) -> Result<Alphabet> {
        if let Some(r) = opt_radix {
            if r < 2 || r > MAX_RADIX {
                return Err(ConfigError::RadixOutOfRange(r).into());
            }
        }

        let by_pos: Vec<char> = match opt_s {
            Some(s) => {
                let chars: Vec<char> = s.chars().collect();
                if chars.len() < 2 {
                    return Err(ConfigError::AlphabetTooShort.into());
                }
                if chars.len() > MAX_RADIX {
                    return Err(
                        ConfigError::RadixOutOfRange(chars.len()).into()
                    );
                }
                if let Some(r) = opt_radix {
                    if chars.len() != r {
                        return Err(ConfigError::AlphabetRadixMismatch {
                            radix: r,
                            alphabet: chars.len(),
                        }
                        .into());
                    }
                }
                chars
            }
            None => {
                let r = opt_radix.unwrap_or(10);
                if r > DEFAULT_ALPHABET.len() {
                    return Err(ConfigError::RadixNeedsAlphabet(r).into());
                }
                DEFAULT_ALPHABET.chars().take(r).collect()
            }
        };

        let mut by_ltr = Vec::<Letter>::with_capacity(by_pos.len());
        for c in &by_pos {
            by_ltr.push(Letter {
                val: *c,
                pos: by_ltr.len(),
            });
        }
        by_ltr.sort_by_key(|l| l.val);

        for i in 1..by_ltr.len() {
            if by_ltr[i].val == by_ltr[i - 1].val {
                return Err(ConfigError::AlphabetDuplicates.into());
            }
        }

        Ok(Alphabet { by_pos, by_ltr })
    }

    pub fn radix(&self) -> usize {
        self.by_pos.len()
    }

    /// Numeral value of a character.
    pub fn index_of(&self, c: char) -> Result<usize> {
        match self.by_ltr.binary_search_by_key(&c, |l| l.val) {
            Ok(i) => Ok(self.by_ltr[i].pos),
            Err(_) => Err(DomainError::CharNotInAlphabet(c).into()),
        }
    }

    /// Character for a numeral value; `i` must be below the radix.
    pub fn char_at(&self, i: usize) -> char {
        self.by_pos[i]
    }
}

/// Range of supported message lengths `[min_len, max_len]` for a radix.
///
/// The minimum is set by the domain floor of one million:
///   min_len = ceil(log_radix(1_000_000))
///           = ceil(6 / log10(radix))
///
/// The maximum keeps each message half below `2**96`, the ceiling imposed
/// by the 12-byte numeral encoding inside the round block:
///   max_len = 2 * floor(log_radix(2**96))
///           = 2 * floor(96 / log2(radix))
pub(crate) fn message_length_bounds(radix: usize) -> (usize, usize) {
    let min_len = (6f64 / (radix as f64).log10()).ceil() as usize;
    let max_len = 2 * (96f64 / (radix as f64).log2()).floor() as usize;
    (min_len, max_len)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::{message_length_bounds, Alphabet, DEFAULT_ALPHABET};
    use crate::error::{ConfigError, DomainError, Error};
    use crate::result::Result;

    #[test]
    fn defaults_to_decimal() -> Result<()> {
        let alpha = Alphabet::normalize(None, None)?;
        assert_eq!(alpha.radix(), 10);
        assert_eq!(alpha.char_at(9), '9');
        Ok(())
    }

    #[test]
    fn radix_selects_default_prefix() -> Result<()> {
        let alpha = Alphabet::normalize(Some(36), None)?;
        assert_eq!(alpha.radix(), 36);
        assert_eq!(alpha.index_of('z')?, 35);
        Ok(())
    }

    #[test]
    fn full_default_alphabet() -> Result<()> {
        let alpha = Alphabet::normalize(Some(62), None)?;
        assert_eq!(alpha.radix(), DEFAULT_ALPHABET.len());
        assert_eq!(alpha.index_of('Z')?, 61);
        Ok(())
    }

    #[test]
    fn alphabet_implies_radix() -> Result<()> {
        let alpha = Alphabet::normalize(None, Some("abcdef"))?;
        assert_eq!(alpha.radix(), 6);
        Ok(())
    }

    #[test]
    fn large_radix_needs_custom_alphabet() {
        let err = Alphabet::normalize(Some(63), None).unwrap_err();
        assert_eq!(err, Error::Config(ConfigError::RadixNeedsAlphabet(63)));
    }

    #[test]
    fn radix_alphabet_mismatch() {
        let err = Alphabet::normalize(Some(5), Some("abcdef")).unwrap_err();
        assert_eq!(
            err,
            Error::Config(ConfigError::AlphabetRadixMismatch {
                radix: 5,
                alphabet: 6
            })
        );
    }

    #[test]
    fn duplicate_letters() {
        let err = Alphabet::normalize(None, Some("1123456789")).unwrap_err();
        assert_eq!(err, Error::Config(ConfigError::AlphabetDuplicates));
    }

    #[test]
    fn alphabet_too_small() {
        let err = Alphabet::normalize(None, Some("a")).unwrap_err();
        assert_eq!(err, Error::Config(ConfigError::AlphabetTooShort));
    }

    #[test]
    fn radix_out_of_range() {
        assert!(Alphabet::normalize(Some(1), None).is_err());
        assert!(Alphabet::normalize(Some((1 << 16) + 1), None).is_err());
    }

    #[test]
    fn letter_not_found() -> Result<()> {
        let alpha = Alphabet::normalize(None, None)?;
        let err = alpha.index_of('!').unwrap_err();
        assert_eq!(err, Error::Domain(DomainError::CharNotInAlphabet('!')));
        Ok(())
    }

    #[test]
    fn length_bounds() {
        let floor = BigInt::from(1_000_000u32);
        let ceiling = BigInt::from(2u8).pow(96);

        for radix in [2usize, 3, 10, 16, 26, 36, 62] {
            let (min_len, max_len) = message_length_bounds(radix);
            let r = BigInt::from(radix);

            assert!(min_len <= max_len);
            assert!(r.pow(min_len as u32) >= floor);
            assert!(r.pow(min_len as u32 - 1) < floor);
            assert!(r.pow((max_len / 2) as u32) <= ceiling);
            assert!(r.pow((max_len / 2 + 1) as u32) > ceiling);
        }
    }

    #[test]
    fn decimal_bounds() {
        assert_eq!(message_length_bounds(10), (6, 56));
        assert_eq!(message_length_bounds(26), (5, 40));
        assert_eq!(message_length_bounds(36), (4, 36));
    }
}
