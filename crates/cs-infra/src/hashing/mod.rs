mod blake3_hasher;
mod sha256_hasher;

pub use blake3_hasher::Blake3Hasher;
pub use sha256_hasher::Sha256Hasher;
