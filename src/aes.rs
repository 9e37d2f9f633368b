//! The AES primitive used by the Feistel rounds.
//!
//! Only single-block ECB encryption is ever needed; the Feistel structure
//! itself provides the inverse, so AES decryption never runs.

use aes::cipher::{BlockEncrypt, KeyInit};

use crate::error::ConfigError;
use crate::result::Result;

#[derive(Clone, Debug)]
enum EcbType {
    Aes128(aes::Aes128),
    Aes192(aes::Aes192),
    Aes256(aes::Aes256),
}

/// A key-scheduled AES context for any of the three key sizes.
#[derive(Clone, Debug)]
pub struct Cipher {
    enc: EcbType,
}

macro_rules! construct_cipher {
    ($type:ident, $key:expr) => {
        Cipher {
            enc: EcbType::$type(aes::$type::new($key.into())),
        }
    };
}

impl Cipher {
    pub fn new(key: &[u8]) -> Result<Cipher> {
        Ok(match key.len() {
            16 => construct_cipher!(Aes128, key),
            24 => construct_cipher!(Aes192, key),
            32 => construct_cipher!(Aes256, key),
            n => return Err(ConfigError::KeyLength(n).into()),
        })
    }

    /// Encrypt a single 16-byte block. The key schedule is never written
    /// after construction, so a shared context may be used concurrently.
    pub fn encrypt_block(&self, src: &[u8], dst: &mut [u8]) {
        match &self.enc {
            EcbType::Aes128(c) => c.encrypt_block_b2b(src.into(), dst.into()),
            EcbType::Aes192(c) => c.encrypt_block_b2b(src.into(), dst.into()),
            EcbType::Aes256(c) => c.encrypt_block_b2b(src.into(), dst.into()),
        }
    }
}
