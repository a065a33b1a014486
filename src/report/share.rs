use crate::error::Result;
use crate::types::answer::AnswerStore;
use sha2::{Digest, Sha256};

pub const SHARE_CODE_LEN: usize = 12;

/// Short stable code for a set of answers. Identical answers give identical
/// codes; the store serializes in key order.
pub fn share_code(answers: &AnswerStore) -> Result<String> {
    let canonical = serde_json::to_vec(answers)?;
    let digest = Sha256::digest(&canonical);
    let hex = digest
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<String>();
    Ok(hex[..SHARE_CODE_LEN].to_string())
}
