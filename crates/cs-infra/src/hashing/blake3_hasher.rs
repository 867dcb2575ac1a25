use anyhow::Result;
use cs_core::{ports::ContentHashPort, ContentHash, HashAlgorithm};

pub struct Blake3Hasher;

impl ContentHashPort for Blake3Hasher {
    fn hash_bytes(&self, bytes: &[u8]) -> Result<ContentHash> {
        let hash = blake3::hash(bytes);
        Ok(ContentHash {
            alg: HashAlgorithm::Blake3V1,
            bytes: hash.into(),
        })
    }
}
