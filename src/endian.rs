//! # 小端整数编解码
//!
//! 在 4 字节序列与 32 位有符号整数之间转换，用于位图几何字段和载荷长度前缀。
//! 所有运算按 32 位补码回绕，与平台字长无关。

/// 将 4 个小端字节组合为 `i32`，最高位解释为符号位。
pub fn bytes_to_i32(bytes: [u8; 4]) -> i32 {
    let [b0, b1, b2, b3] = bytes;
    (b0 as u32 | (b1 as u32) << 8 | (b2 as u32) << 16 | (b3 as u32) << 24) as i32
}

/// `bytes_to_i32` 的逆运算，逐字节掩码取出。
pub fn i32_to_bytes(value: i32) -> [u8; 4] {
    let n = value as u32;
    [
        (n & 0xFF) as u8,
        ((n >> 8) & 0xFF) as u8,
        ((n >> 16) & 0xFF) as u8,
        ((n >> 24) & 0xFF) as u8,
    ]
}

/// 从 `buf[offset..offset + 4]` 读取一个小端 `i32`，越界时返回 `None`。
pub fn read_i32_le(buf: &[u8], offset: usize) -> Option<i32> {
    let end = offset.checked_add(4)?;
    let field: [u8; 4] = buf.get(offset..end)?.try_into().ok()?;
    Some(bytes_to_i32(field))
}
