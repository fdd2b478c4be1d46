//! # 错误类型模块
//!
//! 库内部的所有失败都以 `StegoError` 返回，由命令层决定如何报告和退出。

use std::io;
use std::path::PathBuf;

/// 错误的大类，供调用方按类别处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 文件读写失败。
    Io,
    /// 输入不是可切分的位图。
    InvalidBitmap,
    /// 载荷超出像素数组容量。
    PayloadTooLarge,
    /// 嵌入的长度前缀与像素数组不符。
    CorruptedPayload,
}

#[derive(thiserror::Error, Debug)]
pub enum StegoError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File is too short to hold the bitmap headers: {len} bytes, need at least 54")]
    TruncatedHeader { len: usize },

    #[error("Unsupported bitmap geometry: width = {width}, height = {height}")]
    InvalidGeometry { width: i32, height: i32 },

    #[error("Pixel array extends beyond the end of the file: need {required} bytes, file has {available}")]
    PixelArrayOutOfBounds { required: u64, available: usize },

    #[error("Not enough space in the image to hide the payload: need {required} pixel bytes, have {available}")]
    PayloadTooLarge { required: u64, available: usize },

    #[error("Hidden length prefix {length} does not fit a pixel array of {available} bytes")]
    CorruptedPayload { length: i64, available: usize },
}

impl StegoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StegoError::Io { .. } => ErrorKind::Io,
            StegoError::TruncatedHeader { .. }
            | StegoError::InvalidGeometry { .. }
            | StegoError::PixelArrayOutOfBounds { .. } => ErrorKind::InvalidBitmap,
            StegoError::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            StegoError::CorruptedPayload { .. } => ErrorKind::CorruptedPayload,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StegoError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StegoError>;
