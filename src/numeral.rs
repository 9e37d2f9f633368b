//! Conversion between character strings and their numeric values.
//!
//! The Feistel rounds consume each half of the message with its first
//! character as the least significant digit. `decode` therefore weights
//! characters from the end of the slice, and `encode` emits digits starting
//! with the least significant, padding short results on the right with the
//! zero character of the alphabet. The two are inverses of one another.
//!
//! The radix may be as large as 65536, so conversion runs explicit
//! divide/remainder loops; the byte-digit helpers of `num_bigint` only
//! cover radixes up to 256.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::alphabet::Alphabet;
use crate::result::Result;

/// Numeric value of `chars`, the first character carrying the lowest
/// weight.
pub(crate) fn decode(chars: &[char], alpha: &Alphabet) -> Result<BigInt> {
    let radix = BigInt::from(alpha.radix());

    let mut n = BigInt::from(0u32);
    for c in chars.iter().rev() {
        n = n * &radix + BigInt::from(alpha.index_of(*c)?);
    }

    Ok(n)
}

/// Digits of the non-negative `n`, least significant first, right-padded
/// with the zero character to `length` characters.
pub(crate) fn encode(n: &BigInt, length: usize, alpha: &Alphabet) -> Vec<char> {
    let radix = BigInt::from(alpha.radix());

    let mut q = n.clone();
    let mut out = Vec::<char>::with_capacity(length);
    while q >= radix {
        let d = (&q % &radix).to_usize().expect("digit is below the radix");
        out.push(alpha.char_at(d));
        q /= &radix;
    }
    out.push(alpha.char_at(q.to_usize().expect("digit is below the radix")));

    if out.len() < length {
        out.resize(length, alpha.char_at(0));
    }

    out
}
