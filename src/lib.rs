//! Format-preserving Encryption
//!
//! Provides an implementation of the NIST-specified FF3-1 encryption
//! algorithm. Format-preserving encryption, in short, means that both the
//! plaintext and ciphertext will consist of the same alphabet of characters
//! and have the same length, which makes it suitable for tokenizing
//! structured identifiers such as account numbers.
//!
//! If no alphabet is supplied, as is the case in the example below, a default
//! alphabet is used, consisting of the characters `0` through `9`, followed
//! by the letters `a` through `z`, and then by the letters `A` through `Z`.
//! The maximum radix supported by this default alphabet is 62, the number of
//! characters in the alphabet; larger radixes, up to 65536, require a custom
//! alphabet.
//!
//! # Example
//! ```rust
//! let ff3_1 = ff3::ff3_1::FF3_1::new(
//!     "EF4359D8D580AA4F7F036D6F04FC6A94", // the encryption key, in hex
//!     "D8E7920AFA330A73",                 // the default tweak, in hex
//!     Some(10), // radix specifies the number of characters in the alphabet
//!     None,     // use (the first 10 characters of) the default alphabet
//! ).unwrap();
//!
//! let pt = "890121234567890000";
//! let ct = "750918814058654607";
//!
//! let out = ff3_1.encrypt(pt).unwrap();
//! assert!(out == ct);
//!
//! let out = ff3_1.decrypt(ct).unwrap();
//! assert!(out == pt);
//! ```

pub(crate) mod aes;
pub(crate) mod alphabet;
pub mod error;
pub mod ff3_1;
pub(crate) mod numeral;
pub(crate) mod tweak;

/// Results returned by the FPE library
pub mod result {
    /// Short hand to return a result (or an FPE error)
    pub type Result<T> = std::result::Result<T, crate::error::Error>;
}
