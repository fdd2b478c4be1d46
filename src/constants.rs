/// BMP 文件头 (BITMAPFILEHEADER) 的大小 (字节)。
pub const FILE_HEADER_SIZE: usize = 14;

/// BMP 信息头 (BITMAPINFOHEADER) 的大小 (字节)。
pub const INFO_HEADER_SIZE: usize = 40;

/// 像素数组的起始偏移，即两个头部的总长度。
pub const PIXEL_ARRAY_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// 宽度字段在信息头内的偏移。
pub const WIDTH_OFFSET: usize = 4;

/// 高度字段在信息头内的偏移。
pub const HEIGHT_OFFSET: usize = 8;

/// 24 位色深下每个像素占用的字节数。
pub const BYTES_PER_PIXEL: usize = 3;

/// 隐写单个数据字节所需的像素字节数。
/// 每个像素字节存储 2 bits，因此 8 / 2 = 4。
pub const BYTES_PER_CHAR: usize = 4;

/// 用于隐写载荷长度的像素字节数。
/// 长度以 `i32` (4 字节) 存储，需要 4 * 4 = 16 个像素字节。
pub const LENGTH_HIDING_BYTES: usize = 4 * BYTES_PER_CHAR;

/// 像素字节中被覆写的低位掩码。
pub const LOW_BITS_MASK: u8 = 0x3;
