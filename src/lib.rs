//! # bmp_hide 库
//!
//! 本库包含 BMP 位图 LSB 隐写工具的核心逻辑：位图切分、小端整数编解码和 2-bit 隐写编解码。

pub mod bitmap;
pub mod cli;
pub mod constants;
pub mod endian;
pub mod error;
pub mod handler;
pub mod steganography;

pub use error::{ErrorKind, StegoError};
