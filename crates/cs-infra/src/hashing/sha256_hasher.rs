use anyhow::Result;
use cs_core::{ports::ContentHashPort, ContentHash, HashAlgorithm};
use sha2::{Digest, Sha256};

pub struct Sha256Hasher;

impl ContentHashPort for Sha256Hasher {
    fn hash_bytes(&self, bytes: &[u8]) -> Result<ContentHash> {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Ok(ContentHash {
            alg: HashAlgorithm::Sha256V1,
            bytes: hasher.finalize().into(),
        })
    }
}
