//! Little-endian wire format shared with the program.
//!
//! - Integers are fixed-width little-endian with no padding or alignment.
//! - `bool` is one byte, `0` or `1`.
//! - Strings are a `u32` byte length followed by UTF-8 bytes.
//! - Sequences are a `u32` element count followed by the elements.
//! - Addresses are their 32 raw bytes.

use solana_sdk::pubkey::{Pubkey, PUBKEY_BYTES};

/// Errors raised by the codec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// Read past the end of the buffer.
    #[error("unexpected end of data: need {needed} bytes at offset {offset}, {remaining} left")]
    UnexpectedEnd {
        /// Offset of the read.
        offset: usize,
        /// Bytes requested.
        needed: usize,
        /// Bytes left.
        remaining: usize,
    },
    /// A length prefix exceeds the remaining bytes.
    #[error("length prefix {len} exceeds the {remaining} remaining bytes")]
    InvalidLength {
        /// Decoded length.
        len: usize,
        /// Bytes left after the prefix.
        remaining: usize,
    },
    /// A length does not fit in the `u32` prefix.
    #[error("length {0} does not fit in u32")]
    LengthOverflow(usize),
    /// Invalid UTF-8 string.
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    /// Invalid bool byte.
    #[error("invalid bool: {0}")]
    InvalidBool(u8),
    /// A tag byte outside of the known table.
    #[error("invalid {kind}: {value}")]
    InvalidTag {
        /// Name of the tagged type.
        kind: &'static str,
        /// Decoded byte.
        value: u8,
    },
}

/// Types with a wire encoding.
pub trait Encode {
    /// Append the encoded bytes to `buf`.
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError>;

    /// Encode into a new buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, EncodingError> {
        let mut buf = Vec::new();
        self.encode(&mut buf)?;
        Ok(buf)
    }
}

/// Types that can be read back from their wire encoding.
pub trait Decode: Sized {
    /// Read a value at the cursor.
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, EncodingError>;

    /// Decode a value from the start of `data`. Trailing bytes are ignored.
    fn from_bytes(data: &[u8]) -> Result<Self, EncodingError> {
        Cursor::new(data).read()
    }
}

/// A read cursor over a byte buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Take the next `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], EncodingError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(EncodingError::UnexpectedEnd {
                offset: self.offset,
                needed: len,
                remaining,
            });
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    /// Take the next `N` bytes as an array.
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N], EncodingError> {
        let mut array = [0; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }

    /// Skip `len` bytes.
    pub fn skip(&mut self, len: usize) -> Result<(), EncodingError> {
        self.take(len).map(|_| ())
    }

    /// Read a value.
    pub fn read<T: Decode>(&mut self) -> Result<T, EncodingError> {
        T::decode(self)
    }

    fn read_len(&mut self) -> Result<usize, EncodingError> {
        let len = self.read::<u32>()? as usize;
        Ok(len)
    }
}

fn encode_len(len: usize, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
    let len = u32::try_from(len).map_err(|_| EncodingError::LengthOverflow(len))?;
    len.encode(buf)
}

macro_rules! impl_int {
    ($($ty:ty),*) => {
        $(
            impl Encode for $ty {
                fn encode(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
                    buf.extend_from_slice(&self.to_le_bytes());
                    Ok(())
                }
            }

            impl Decode for $ty {
                fn decode(cursor: &mut Cursor<'_>) -> Result<Self, EncodingError> {
                    Ok(<$ty>::from_le_bytes(cursor.take_array()?))
                }
            }
        )*
    };
}

impl_int!(u8, u16, u32, u64, i16, i32, i64);

impl Encode for bool {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        u8::from(*self).encode(buf)
    }
}

impl Decode for bool {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, EncodingError> {
        match cursor.read::<u8>()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(EncodingError::InvalidBool(other)),
        }
    }
}

impl Encode for str {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        encode_len(self.len(), buf)?;
        buf.extend_from_slice(self.as_bytes());
        Ok(())
    }
}

impl Encode for String {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        self.as_str().encode(buf)
    }
}

impl Decode for String {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, EncodingError> {
        let len = cursor.read_len()?;
        let remaining = cursor.remaining();
        if len > remaining {
            return Err(EncodingError::InvalidLength { len, remaining });
        }
        let bytes = cursor.take(len)?;
        Ok(std::str::from_utf8(bytes)?.to_owned())
    }
}

impl Encode for Pubkey {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        buf.extend_from_slice(self.as_ref());
        Ok(())
    }
}

impl Decode for Pubkey {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, EncodingError> {
        Ok(Pubkey::new_from_array(cursor.take_array::<PUBKEY_BYTES>()?))
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        encode_len(self.len(), buf)?;
        for item in self {
            item.encode(buf)?;
        }
        Ok(())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        self.as_slice().encode(buf)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, EncodingError> {
        let len = cursor.read_len()?;
        // Every element takes at least one byte.
        let remaining = cursor.remaining();
        if len > remaining {
            return Err(EncodingError::InvalidLength { len, remaining });
        }
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(cursor.read()?);
        }
        Ok(items)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        (**self).encode(buf)
    }
}

#[cfg(test)]
mod tests {
    use borsh::{BorshDeserialize, BorshSerialize};

    use super::*;

    #[test]
    fn matches_borsh_layout() {
        let name = "Gameweek 12 ⚽".to_string();
        assert_eq!(name.to_bytes().unwrap(), name.try_to_vec().unwrap());

        let ids: Vec<u32> = (1..=15).collect();
        assert_eq!(ids.to_bytes().unwrap(), ids.try_to_vec().unwrap());

        let deadline = -1_700_000_000i64;
        assert_eq!(deadline.to_bytes().unwrap(), deadline.try_to_vec().unwrap());

        let max_participants = 512u16;
        assert_eq!(
            max_participants.to_bytes().unwrap(),
            max_participants.try_to_vec().unwrap()
        );
    }

    #[test]
    fn reads_borsh_output() {
        let bytes = ("Premier League".to_string(), u64::MAX, vec![7u32, 11])
            .try_to_vec()
            .unwrap();
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.read::<String>().unwrap(), "Premier League");
        assert_eq!(cursor.read::<u64>().unwrap(), u64::MAX);
        assert_eq!(cursor.read::<Vec<u32>>().unwrap(), vec![7, 11]);
        assert_eq!(cursor.remaining(), 0);

        let back = <(String, u64, Vec<u32>)>::try_from_slice(&bytes).unwrap();
        assert_eq!(back.0, "Premier League");
    }

    #[test]
    fn round_trip() {
        let long = "x".repeat(300);
        for s in ["", "a", "Fantasy ⚽ League", long.as_str()] {
            assert_eq!(String::from_bytes(&s.to_bytes().unwrap()).unwrap(), s);
        }
        for n in [0u64, 1, 10_000_000, u64::MAX] {
            assert_eq!(u64::from_bytes(&n.to_bytes().unwrap()).unwrap(), n);
        }
        for n in [i64::MIN, -1, 0, i64::MAX] {
            assert_eq!(i64::from_bytes(&n.to_bytes().unwrap()).unwrap(), n);
        }
        for n in [0u16, 15, u16::MAX] {
            assert_eq!(u16::from_bytes(&n.to_bytes().unwrap()).unwrap(), n);
        }
        let key = Pubkey::new_unique();
        assert_eq!(Pubkey::from_bytes(&Encode::to_bytes(&key).unwrap()).unwrap(), key);
    }

    #[test]
    fn truncated_integer() {
        let err = u64::from_bytes(&[0; 7]).unwrap_err();
        assert_eq!(
            err,
            EncodingError::UnexpectedEnd {
                offset: 0,
                needed: 8,
                remaining: 7
            }
        );
    }

    #[test]
    fn length_prefix_beyond_buffer() {
        let err = String::from_bytes(&[5, 0, 0, 0, b'a']).unwrap_err();
        assert_eq!(err, EncodingError::InvalidLength { len: 5, remaining: 1 });

        let err = Vec::<u32>::from_bytes(&[0xff, 0xff, 0xff, 0xff]).unwrap_err();
        assert!(matches!(err, EncodingError::InvalidLength { .. }));

        let err = Vec::<u32>::from_bytes(&[2, 0, 0, 0, 1, 0, 0, 0, 2]).unwrap_err();
        assert!(matches!(err, EncodingError::UnexpectedEnd { .. }));
    }

    #[test]
    fn invalid_utf8_and_bool() {
        assert!(matches!(
            String::from_bytes(&[2, 0, 0, 0, 0xc3, 0x28]),
            Err(EncodingError::InvalidUtf8(_))
        ));
        assert_eq!(bool::from_bytes(&[2]), Err(EncodingError::InvalidBool(2)));
        assert!(bool::from_bytes(&[1]).unwrap());
    }
}
