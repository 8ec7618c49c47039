use crate::types::TargetFault;

/// Split `data` into consecutive chunks of `size` elements; the last chunk
/// may be shorter. Non-positive sizes produce no chunks.
pub fn make_chunks(data: &[i64], size: i64) -> Result<Vec<Vec<i64>>, TargetFault> {
    if size <= 0 {
        return Ok(Vec::new());
    }
    let size = usize::try_from(size)
        .map_err(|_| TargetFault::invalid_input(format!("chunk size {size} does not fit usize")))?;
    Ok(data.chunks(size).map(<[i64]>::to_vec).collect())
}
