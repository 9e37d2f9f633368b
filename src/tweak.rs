//! Expansion of the tweak into the two half-tweaks used by the rounds.

use byteorder::{BigEndian, ByteOrder};

use crate::error::ConfigError;
use crate::result::Result;

/// Original FF3 tweak length, in bytes.
pub(crate) const TWEAK_LEN: usize = 8;
/// FF3-1 tweak length, in bytes.
pub(crate) const TWEAK_LEN_NEW: usize = 7;

pub(crate) fn validate_length(n: usize) -> Result<()> {
    if n != TWEAK_LEN && n != TWEAK_LEN_NEW {
        return Err(ConfigError::TweakLength(n).into());
    }
    Ok(())
}

/// Split the tweak into `(Tl, Tr)`.
///
/// A 64-bit tweak is cut in half as-is. A 56-bit tweak spreads its bits:
/// `Tl` carries the first 28 with the nibble below cleared, and `Tr`
/// carries the remaining 24 shifted up by a nibble.
pub(crate) fn expand(tweak: &[u8]) -> Result<([u8; 4], [u8; 4])> {
    let mut tl = [0u8; 4];
    let mut tr = [0u8; 4];

    match tweak.len() {
        TWEAK_LEN => {
            tl.copy_from_slice(&tweak[..4]);
            tr.copy_from_slice(&tweak[4..]);
        }
        TWEAK_LEN_NEW => {
            tl.copy_from_slice(&tweak[..4]);
            tl[3] &= 0xf0;
            BigEndian::write_u32(
                &mut tr,
                BigEndian::read_u24(&tweak[4..]) << 4,
            );
        }
        n => return Err(ConfigError::TweakLength(n).into()),
    }

    Ok((tl, tr))
}

#[cfg(test)]
mod tests {
    use super::{expand, validate_length};
    use crate::error::{ConfigError, Error};
    use crate::result::Result;

    #[test]
    fn splits_64_bit_tweak() -> Result<()> {
        let t = hex::decode("D8E7920AFA330A73").unwrap();
        let (tl, tr) = expand(&t)?;
        assert_eq!(tl, [0xd8, 0xe7, 0x92, 0x0a]);
        assert_eq!(tr, [0xfa, 0x33, 0x0a, 0x73]);
        Ok(())
    }

    #[test]
    fn expands_56_bit_tweak() -> Result<()> {
        let t = hex::decode("D8E7920AFA330A").unwrap();
        let (tl, tr) = expand(&t)?;
        assert_eq!(tl, [0xd8, 0xe7, 0x92, 0x00]);
        assert_eq!(tr, [0x0f, 0xa3, 0x30, 0xa0]);
        Ok(())
    }

    #[test]
    fn rejects_other_lengths() {
        let err = expand(&[0u8; 6]).unwrap_err();
        assert_eq!(err, Error::Config(ConfigError::TweakLength(6)));
        assert!(expand(&[0u8; 9]).is_err());
        assert!(validate_length(0).is_err());
        assert!(validate_length(7).is_ok());
        assert!(validate_length(8).is_ok());
    }
}
