//! The FF3-1 algorithm
//!
//! The FF3-1 algorithm supports key sizes of 128, 192, and 256 bits. The
//! length of the tweak is specified by the algorithm as 56 bits; the
//! 64-bit tweak of the original FF3 is accepted as well and split without
//! any bit manipulation.
//!
//! This implementation contains a "context" structure, called FF3_1,
//! that holds the encryption key, the default tweak, and some other
//! parameters related to the algorithm. Once this structure has been
//! created, it can be used to encrypt and decrypt data; a tweak supplied
//! to [`FF3_1::encrypt_with_tweak`] or [`FF3_1::decrypt_with_tweak`]
//! overrides the default for that call.
//!
//! # Example
//! ```rust
//! let ff3_1 = ff3::ff3_1::FF3_1::new(
//!     "EF4359D8D580AA4F7F036D6F04FC6A94", // the encryption key, in hex
//!     "D8E7920AFA330A",                   // a 56-bit tweak, in hex
//!     Some(10), // radix specifies the number of characters in the alphabet
//!     None,     // use (the first 10 characters of) the default alphabet
//! ).unwrap();
//!
//! let pt = "890121234567890000";
//! let ct = "428531276362567922";
//!
//! let out = ff3_1.encrypt(pt).unwrap();
//! assert!(out == ct);
//!
//! let out = ff3_1.decrypt(ct).unwrap();
//! assert!(out == pt);
//! ```

use num_bigint::{BigInt, Sign};
use num_traits::Euclid;
use tracing::trace;
use zeroize::Zeroize;

use crate::aes;
use crate::alphabet::{self, Alphabet};
use crate::error::{ConfigError, DomainError};
use crate::numeral;
use crate::result::Result;
use crate::tweak;

const NUM_ROUNDS: usize = 8;
const BLOCK_SIZE: usize = 16;

enum CipherType {
    Encrypt,
    Decrypt,
}

/// The FF3_1 context structure
#[derive(Debug)]
pub struct FF3_1 {
    cipher: aes::Cipher,
    twk: Vec<u8>,
    alpha: Alphabet,
    min_len: usize,
    max_len: usize,
}

impl FF3_1 {
    /// Create a new FF3-1 context
    ///
    /// The key is a hexadecimal string of 32, 48, or 64 digits for
    /// AES-128, AES-192, or AES-256. The default tweak is a hexadecimal
    /// string of 14 digits (56 bits), or 16 digits for the original
    /// 64-bit FF3 tweak.
    ///
    /// The radix and alphabet are optional. A radix alone selects a
    /// prefix of the default alphabet; an alphabet alone implies its
    /// length as the radix; with neither, messages are decimal strings.
    pub fn new(
        key: &str,
        twk: &str,
        opt_radix: Option<usize>,
        opt_alpha: Option<&str>,
    ) -> Result<Self> {
        let alpha = Alphabet::normalize(opt_radix, opt_alpha)?;
        let (min_len, max_len) = alphabet::message_length_bounds(alpha.radix());

        // the AES key is used in byte-reversed form. reverse it once
        // here; the rounds are oblivious to it
        let mut k = hex::decode(key).map_err(|_| ConfigError::KeyNotHex)?;
        k.reverse();
        let cipher = aes::Cipher::new(&k)?;
        k.zeroize();

        let twk = hex::decode(twk).map_err(|_| ConfigError::TweakNotHex)?;
        tweak::validate_length(twk.len())?;

        Ok(FF3_1 {
            cipher,
            twk,
            alpha,
            min_len,
            max_len,
        })
    }

    // the code wants to work with individual characters or letters.
    // this isn't possible with utf8, so the caller is expected to
    // convert Strings to sequences of chars
    fn cipher_chars(
        &self,
        inp: &[char],
        opt_twk: Option<&[u8]>,
        which: CipherType,
    ) -> Result<Vec<char>> {
        let radix = self.alpha.radix();

        let n = inp.len();
        if n < self.min_len || n > self.max_len {
            return Err(DomainError::MessageLength {
                len: n,
                min: self.min_len,
                max: self.max_len,
            }
            .into());
        }

        // surface stray characters at the entry point rather than
        // partway through the rounds
        for c in inp {
            self.alpha.index_of(*c)?;
        }

        // (step 1)
        let v = n / 2;
        let u = n - v;

        // (step 2)
        let mut a = inp[..u].to_vec();
        let mut b = inp[u..].to_vec();

        // (step 3)
        let t = opt_twk.unwrap_or(&self.twk);
        let (tl, tr) = tweak::expand(t)?;

        // radix**m, where m is either u or v, is needed by every round.
        // just calculate them both here (step 4v, partial)
        let mod_u = BigInt::from(radix).pow(u as u32);
        let mod_v = BigInt::from(radix).pow(v as u32);

        trace!(len = n, u, v, radix, tweak_len = t.len(), "cipher call");

        for r in 0..NUM_ROUNDS {
            // decryption runs the rounds in reverse order
            let i = match which {
                CipherType::Encrypt => r,
                CipherType::Decrypt => NUM_ROUNDS - 1 - r,
            };

            // (step 4i)
            let (m, w) = if i % 2 == 0 { (u, &tr) } else { (v, &tl) };

            // (step 4ii) the block is built over the half that stays
            // fixed this round
            let p = match which {
                CipherType::Encrypt => {
                    round_block(i as u8, w, &b, &self.alpha)?
                }
                CipherType::Decrypt => {
                    round_block(i as u8, w, &a, &self.alpha)?
                }
            };

            // (step 4iii) the AES input and output follow the
            // reversed-byte convention
            let mut rp = p;
            rp.reverse();
            let mut s = [0u8; BLOCK_SIZE];
            self.cipher.encrypt_block(&rp, &mut s);
            s.reverse();

            // (step 4iv)
            let y = BigInt::from_bytes_be(Sign::Plus, &s);

            // (step 4v) combine. decryption subtracts, so the reduction
            // must be the euclidean remainder to stay non-negative
            let c = match which {
                CipherType::Encrypt => numeral::decode(&a, &self.alpha)? + y,
                CipherType::Decrypt => numeral::decode(&b, &self.alpha)? - y,
            };
            let c = c.rem_euclid(if i % 2 == 0 { &mod_u } else { &mod_v });

            let cc = numeral::encode(&c, m, &self.alpha);

            // (step 4vii, 4viii) the half swap is mirrored on decryption
            match which {
                CipherType::Encrypt => a = std::mem::replace(&mut b, cc),
                CipherType::Decrypt => b = std::mem::replace(&mut a, cc),
            }
        }

        // (step 5)
        Ok([a, b].concat())
    }

    // common function to convert the input String to a sequence
    // of chars before the cipher operation and back again after
    fn cipher_string(
        &self,
        inp_s: &str,
        opt_twk: Option<&[u8]>,
        which: CipherType,
    ) -> Result<String> {
        let inp_c: Vec<char> = inp_s.chars().collect();
        let out_c = self.cipher_chars(&inp_c, opt_twk, which)?;
        Ok(String::from_iter(out_c))
    }

    /// Encrypt a string using the tweak supplied at construction.
    ///
    /// The ciphertext has the same length as the plaintext and consists
    /// of characters from the same alphabet.
    pub fn encrypt(&self, pt: &str) -> Result<String> {
        self.cipher_string(pt, None, CipherType::Encrypt)
    }

    /// Decrypt a string using the tweak supplied at construction.
    pub fn decrypt(&self, ct: &str) -> Result<String> {
        self.cipher_string(ct, None, CipherType::Decrypt)
    }

    /// Encrypt a string under the given tweak, a hexadecimal string of
    /// 14 or 16 digits, instead of the construction-time default.
    pub fn encrypt_with_tweak(&self, pt: &str, twk: &str) -> Result<String> {
        let t = hex::decode(twk).map_err(|_| ConfigError::TweakNotHex)?;
        self.cipher_string(pt, Some(&t), CipherType::Encrypt)
    }

    /// Decrypt a string under the given tweak. The tweak used must match
    /// the one used during encryption.
    pub fn decrypt_with_tweak(&self, ct: &str, twk: &str) -> Result<String> {
        let t = hex::decode(twk).map_err(|_| ConfigError::TweakNotHex)?;
        self.cipher_string(ct, Some(&t), CipherType::Decrypt)
    }
}

// The 16-byte AES input for round `i`: the half-tweak with the round
// index folded into its last byte, then the numeric value of the
// opposite half as a 12-byte big-endian quantity.
fn round_block(
    i: u8,
    w: &[u8; 4],
    half: &[char],
    alpha: &Alphabet,
) -> Result<[u8; BLOCK_SIZE]> {
    let mut p = [0u8; BLOCK_SIZE];

    p[..4].copy_from_slice(w);
    p[3] ^= i;

    // the message length bounds keep this value below 2**96, so it
    // always fits the remaining 12 bytes
    let (_, bytes) = numeral::decode(half, alpha)?.to_bytes_be();
    p[BLOCK_SIZE - bytes.len()..].copy_from_slice(&bytes);

    Ok(p)
}

fn cipher(
    key: &str,
    twk: &str,
    txt: &str,
    radix: Option<usize>,
    alpha: Option<&str>,
    op: fn(&FF3_1, &str) -> Result<String>,
) -> Result<String> {
    let ff3_1 = FF3_1::new(key, twk, radix, alpha)?;
    op(&ff3_1, txt)
}

/// One-shot encryption, without keeping a context around.
pub fn encrypt(
    key: &str,
    twk: &str,
    pt: &str,
    radix: Option<usize>,
    alpha: Option<&str>,
) -> Result<String> {
    cipher(key, twk, pt, radix, alpha, FF3_1::encrypt)
}

/// One-shot decryption, without keeping a context around.
pub fn decrypt(
    key: &str,
    twk: &str,
    ct: &str,
    radix: Option<usize>,
    alpha: Option<&str>,
) -> Result<String> {
    cipher(key, twk, ct, radix, alpha, FF3_1::decrypt)
}
