//! # LSB 隐写核心
//!
//! 每个数据字节拆成 4 组 2 bits，从低位到高位依次写入 4 个连续像素字节的最低 2 位。
//! 像素数组开头的 16 个字节存放载荷长度 (小端 `i32`)，随后是载荷本身。

use crate::constants::{BYTES_PER_CHAR, LENGTH_HIDING_BYTES, LOW_BITS_MASK};
use crate::endian::{bytes_to_i32, i32_to_bytes};
use crate::error::{Result, StegoError};

/// 将 `value` 写入 `pix` 前 4 个字节的最低 2 位，高 6 位保持不变。
///
/// 调用方保证 `pix.len() >= BYTES_PER_CHAR`。
pub fn embed_byte(mut value: u8, pix: &mut [u8]) {
    for byte in pix[..BYTES_PER_CHAR].iter_mut() {
        *byte = (value & LOW_BITS_MASK) | (*byte & !LOW_BITS_MASK);
        value >>= 2;
    }
}

/// `embed_byte` 的逆运算。
pub fn extract_byte(pix: &[u8]) -> u8 {
    pix[..BYTES_PER_CHAR]
        .iter()
        .enumerate()
        .fold(0u8, |acc, (i, &byte)| acc | (byte & LOW_BITS_MASK) << (2 * i))
}

/// 隐藏 `len` 字节的载荷所需的像素字节数 (含长度前缀)。
pub fn required_space(len: usize) -> u64 {
    LENGTH_HIDING_BYTES as u64 + BYTES_PER_CHAR as u64 * len as u64
}

/// 长度为 `pixel_len` 的像素数组最多能隐藏的载荷字节数。
pub fn capacity(pixel_len: usize) -> usize {
    let usable = pixel_len.saturating_sub(LENGTH_HIDING_BYTES) / BYTES_PER_CHAR;
    usable.min(i32::MAX as usize)
}

/// 将带长度前缀的载荷原地写入像素数组。
///
/// 容量检查在写入前完成，失败时像素数组保持原样。
///
/// # Errors
///
/// 载荷长度无法用 `i32` 表示，或 `16 + 4 * len` 超过像素数组长度时返回 `PayloadTooLarge`。
pub fn hide(payload: &[u8], pixels: &mut [u8]) -> Result<()> {
    let required = required_space(payload.len());
    let length = i32::try_from(payload.len());
    let length = match length {
        Ok(length) if required <= pixels.len() as u64 => length,
        _ => {
            return Err(StegoError::PayloadTooLarge {
                required,
                available: pixels.len(),
            });
        }
    };

    let prefix = i32_to_bytes(length);
    prefix
        .iter()
        .chain(payload)
        .zip(pixels.chunks_exact_mut(BYTES_PER_CHAR))
        .for_each(|(&value, chunk)| embed_byte(value, chunk));

    log::debug!(
        "Hid {} payload bytes in {} of {} pixel bytes",
        payload.len(),
        required,
        pixels.len()
    );
    Ok(())
}

/// 从像素数组中读回长度前缀，再按长度取出载荷。像素数组不会被修改。
///
/// # Errors
///
/// 长度前缀为负、超出像素数组范围，或像素数组不足 16 字节时返回 `CorruptedPayload`。
pub fn show(pixels: &[u8]) -> Result<Vec<u8>> {
    let length = hidden_length(pixels)?;
    let start = LENGTH_HIDING_BYTES;
    let end = start + BYTES_PER_CHAR * length;

    let payload: Vec<u8> = pixels[start..end]
        .chunks_exact(BYTES_PER_CHAR)
        .map(extract_byte)
        .collect();

    log::debug!("Recovered {} payload bytes", payload.len());
    Ok(payload)
}

/// 只解码并校验长度前缀，返回载荷字节数。
pub fn hidden_length(pixels: &[u8]) -> Result<usize> {
    if pixels.len() < LENGTH_HIDING_BYTES {
        return Err(StegoError::CorruptedPayload {
            length: -1,
            available: pixels.len(),
        });
    }

    let mut prefix = [0u8; 4];
    for (slot, chunk) in prefix
        .iter_mut()
        .zip(pixels[..LENGTH_HIDING_BYTES].chunks_exact(BYTES_PER_CHAR))
    {
        *slot = extract_byte(chunk);
    }
    let length = bytes_to_i32(prefix);
    log::trace!("Length prefix {:02x?} decodes to {}", prefix, length);

    match usize::try_from(length) {
        Ok(len) if required_space(len) <= pixels.len() as u64 => Ok(len),
        _ => Err(StegoError::CorruptedPayload {
            length: length as i64,
            available: pixels.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn embed_writes_low_bits_in_order() {
        let mut pix = [0xFFu8; 4];
        embed_byte(0b10_01_00_11, &mut pix);
        assert_eq!(pix, [0xFF, 0xFC, 0xFD, 0xFE]);
        assert_eq!(extract_byte(&pix), 0b10_01_00_11);
    }

    #[test]
    fn single_byte_in_ten_by_ten_image() {
        let mut pixels = vec![0u8; 300];
        hide(&[0x41], &mut pixels).unwrap();

        assert_eq!(hidden_length(&pixels).unwrap(), 1);
        assert_eq!(extract_byte(&pixels[16..20]), 0x41);
        assert!(pixels[20..].iter().all(|&b| b == 0));
        assert_eq!(show(&pixels).unwrap(), vec![0x41]);
    }

    #[test]
    fn hello_keeps_high_bits() {
        let mut pixels = vec![0xFFu8; 1000];
        hide(b"Hello", &mut pixels).unwrap();

        assert!(pixels[..36].iter().all(|&b| b >> 2 == 0b111111));
        assert!(pixels[36..].iter().all(|&b| b == 0xFF));
        assert_eq!(show(&pixels).unwrap(), b"Hello");
    }

    #[test]
    fn round_trip_over_arbitrary_pixels() {
        let payload: Vec<u8> = (0..=255).collect();
        let original: Vec<u8> = (0..2000u32).map(|i| (i * 37 % 251) as u8).collect();
        let mut pixels = original.clone();

        hide(&payload, &mut pixels).unwrap();

        for (before, after) in original.iter().zip(&pixels) {
            assert_eq!(before & 0xFC, after & 0xFC);
        }
        assert_eq!(show(&pixels).unwrap(), payload);
    }

    #[test]
    fn empty_payload_needs_length_field() {
        let mut pixels = vec![0x55u8; 6];
        let err = hide(&[], &mut pixels).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PayloadTooLarge);
        assert!(matches!(
            err,
            StegoError::PayloadTooLarge {
                required: 16,
                available: 6
            }
        ));

        let mut pixels = vec![0x55u8; 16];
        hide(&[], &mut pixels).unwrap();
        assert_eq!(show(&pixels).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn oversized_payload_leaves_pixels_untouched() {
        let mut pixels = vec![0xABu8; 23];
        let err = hide(b"xy", &mut pixels).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PayloadTooLarge);
        assert!(pixels.iter().all(|&b| b == 0xAB));
    }

    #[test]
    fn exact_fit_is_accepted() {
        let mut pixels = vec![0u8; 24];
        hide(b"xy", &mut pixels).unwrap();
        assert_eq!(show(&pixels).unwrap(), b"xy");
    }

    #[test]
    fn length_prefix_past_end_is_corrupt() {
        let mut pixels = vec![0u8; 40];
        for (value, chunk) in i32_to_bytes(7).iter().zip(pixels.chunks_exact_mut(4)) {
            embed_byte(*value, chunk);
        }
        let err = show(&pixels).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptedPayload);
        assert!(matches!(
            err,
            StegoError::CorruptedPayload {
                length: 7,
                available: 40
            }
        ));
    }

    #[test]
    fn negative_length_prefix_is_corrupt() {
        // 全 0xFF 的低 2 位解码为 -1
        let pixels = vec![0xFFu8; 64];
        let err = show(&pixels).unwrap_err();
        assert!(matches!(err, StegoError::CorruptedPayload { length: -1, .. }));
    }

    #[test]
    fn too_short_for_prefix_is_corrupt() {
        let err = show(&[0u8; 15]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptedPayload);
    }

    #[test]
    fn capacity_matches_required_space() {
        assert_eq!(capacity(0), 0);
        assert_eq!(capacity(16), 0);
        assert_eq!(capacity(19), 0);
        assert_eq!(capacity(20), 1);
        assert_eq!(capacity(300), 71);
        assert!(required_space(capacity(300)) <= 300);
        assert!(required_space(capacity(300) + 1) > 300);
    }
}
