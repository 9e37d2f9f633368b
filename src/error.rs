//! Errors returned by the FPE library

use thiserror::Error;

/// Rejected cipher configurations: unusable key or tweak material, or a
/// radix/alphabet combination the algorithm cannot operate on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("key length is {0} bytes but must be 16, 24, or 32")]
    KeyLength(usize),
    #[error("key is not a valid hexadecimal string")]
    KeyNotHex,
    #[error("tweak length {0} invalid: tweak must be 56 or 64 bits")]
    TweakLength(usize),
    #[error("tweak is not a valid hexadecimal string")]
    TweakNotHex,
    #[error("radix {0} must be in the range [2, 65536]")]
    RadixOutOfRange(usize),
    #[error("alphabet must contain at least two characters")]
    AlphabetTooShort,
    #[error("alphabet has duplicate characters")]
    AlphabetDuplicates,
    #[error("alphabet length {alphabet} conflicts with the given radix {radix}")]
    AlphabetRadixMismatch { radix: usize, alphabet: usize },
    #[error("for radix {0} a custom alphabet must be supplied")]
    RadixNeedsAlphabet(usize),
}

/// Rejected messages: inputs that fall outside the domain a configured
/// cipher can transform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("message length {len} is not within min {min} and max {max} bounds")]
    MessageLength { len: usize, min: usize, max: usize },
    #[error("character {0:?} is not in the alphabet")]
    CharNotInAlphabet(char),
}

/// Any error the library can produce.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
