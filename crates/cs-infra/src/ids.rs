use cs_core::ports::BlockIdGeneratorPort;

/// Block ids as 32 lowercase hex characters, the form course authoring uses
/// for generated blocks.
pub struct UuidBlockIdGenerator;

impl BlockIdGeneratorPort for UuidBlockIdGenerator {
    fn next_block_id(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}
