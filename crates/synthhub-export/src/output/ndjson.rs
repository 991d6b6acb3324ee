use serde::Serialize;

/// Render records as NDJSON bytes: one compact JSON object per line.
pub fn render_ndjson<T: Serialize>(records: &[T]) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    for record in records {
        out.extend_from_slice(&serde_json::to_vec(record)?);
        out.push(b'\n');
    }
    Ok(out)
}
