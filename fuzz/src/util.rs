/// Reinterprets the fuzzer bytes as little endian i32s, dropping a trailing partial value.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
