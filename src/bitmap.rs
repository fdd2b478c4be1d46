//! # 位图切分模块
//!
//! 将整个位图文件的字节切分为文件头、信息头和像素数组三个互不重叠的区域。
//! 除宽度和高度两个字段外，头部内容一律视为不透明数据，原样保留。

use crate::constants::{
    BYTES_PER_PIXEL, FILE_HEADER_SIZE, HEIGHT_OFFSET, INFO_HEADER_SIZE, PIXEL_ARRAY_OFFSET,
    WIDTH_OFFSET,
};
use crate::endian::read_i32_le;
use crate::error::{Result, StegoError};

/// 切分后的位图。
///
/// 像素数组长度由信息头中的 `width * height * 3` 决定，
/// 像素数组之后的字节保存在 `trailer` 中，重新组装时可选择是否保留。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    file_header: [u8; FILE_HEADER_SIZE],
    info_header: [u8; INFO_HEADER_SIZE],
    pixels: Vec<u8>,
    trailer: Vec<u8>,
}

impl Bitmap {
    /// 切分原始位图字节。
    ///
    /// # Errors
    ///
    /// * `TruncatedHeader` - 文件不足 54 字节。
    /// * `InvalidGeometry` - 宽度为负，或像素数组长度溢出。
    /// * `PixelArrayOutOfBounds` - 计算出的像素数组超出文件末尾。
    pub fn split(buffer: &[u8]) -> Result<Self> {
        if buffer.len() < PIXEL_ARRAY_OFFSET {
            return Err(StegoError::TruncatedHeader { len: buffer.len() });
        }

        let mut file_header = [0u8; FILE_HEADER_SIZE];
        file_header.copy_from_slice(&buffer[..FILE_HEADER_SIZE]);
        let mut info_header = [0u8; INFO_HEADER_SIZE];
        info_header.copy_from_slice(&buffer[FILE_HEADER_SIZE..PIXEL_ARRAY_OFFSET]);

        let (width, height) = geometry(&info_header);
        let pixel_len = pixel_array_len(width, height)?;

        let body = &buffer[PIXEL_ARRAY_OFFSET..];
        if pixel_len > body.len() as u64 {
            return Err(StegoError::PixelArrayOutOfBounds {
                required: PIXEL_ARRAY_OFFSET as u64 + pixel_len,
                available: buffer.len(),
            });
        }
        let (pixels, trailer) = body.split_at(pixel_len as usize);

        log::debug!(
            "Split bitmap: {}x{}, {} pixel bytes, {} trailing bytes",
            width,
            height,
            pixels.len(),
            trailer.len()
        );

        Ok(Self {
            file_header,
            info_header,
            pixels: pixels.to_vec(),
            trailer: trailer.to_vec(),
        })
    }

    pub fn width(&self) -> i32 {
        geometry(&self.info_header).0
    }

    pub fn height(&self) -> i32 {
        geometry(&self.info_header).1
    }

    pub fn file_header(&self) -> &[u8; FILE_HEADER_SIZE] {
        &self.file_header
    }

    pub fn info_header(&self) -> &[u8; INFO_HEADER_SIZE] {
        &self.info_header
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// 像素数组之后、未被几何字段覆盖的字节。
    pub fn trailer(&self) -> &[u8] {
        &self.trailer
    }

    /// 按 文件头 + 信息头 + 像素数组 的顺序重新组装位图。
    ///
    /// `keep_trailer` 为 `false` 时丢弃像素数组之后的字节。
    pub fn to_bytes(&self, keep_trailer: bool) -> Vec<u8> {
        let trailer: &[u8] = if keep_trailer { &self.trailer } else { &[] };
        let mut out =
            Vec::with_capacity(PIXEL_ARRAY_OFFSET + self.pixels.len() + trailer.len());
        out.extend_from_slice(&self.file_header);
        out.extend_from_slice(&self.info_header);
        out.extend_from_slice(&self.pixels);
        out.extend_from_slice(trailer);
        out
    }
}

fn geometry(info_header: &[u8; INFO_HEADER_SIZE]) -> (i32, i32) {
    // 信息头固定 40 字节，两个字段必然在界内。
    let width = read_i32_le(info_header, WIDTH_OFFSET).unwrap_or_default();
    let height = read_i32_le(info_header, HEIGHT_OFFSET).unwrap_or_default();
    (width, height)
}

/// 负高度表示自上而下存储的位图，行数取绝对值。
fn pixel_array_len(width: i32, height: i32) -> Result<u64> {
    if width < 0 {
        return Err(StegoError::InvalidGeometry { width, height });
    }
    (width as u64)
        .checked_mul(height.unsigned_abs() as u64)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL as u64))
        .ok_or(StegoError::InvalidGeometry { width, height })
}
