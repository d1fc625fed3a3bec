use std::fmt;

/// A 32-byte digest, used for both block and transaction hashes.
///
/// Hashes are treated as opaque fixed-width blobs rather than as strings;
/// formatting only matters for logging, so [`fmt::Debug`] renders as a
/// truncated hex prefix rather than a full 64-character string.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Digest32(pub [u8; 32]);

impl Digest32 {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for Digest32 {
    fn from(bytes: [u8; 32]) -> Self {
        Digest32(bytes)
    }
}

impl fmt::Debug for Digest32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..")
    }
}

/// Hash of a connected or detached block.
pub type BlockHash = Digest32;

/// Hash of a transaction, as looked up in a mempool snapshot.
pub type TxHash = Digest32;
