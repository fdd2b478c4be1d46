//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`show` 和 `info` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用位图切分与隐写核心函数，并向用户报告结果。

use crate::bitmap::Bitmap;
use crate::cli::{HideArgs, InfoArgs, ShowArgs};
use crate::error::{Result as StegoResult, StegoError};
use crate::steganography::{capacity, hidden_length, hide, required_space, show};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// 读取整个文件。
pub fn load(path: &Path) -> StegoResult<Vec<u8>> {
    fs::read(path).map_err(|e| StegoError::io(path, e))
}

/// 写入整个缓冲区，文件不存在时创建，存在时截断。
pub fn store(bytes: &[u8], path: &Path) -> StegoResult<()> {
    fs::write(path, bytes).map_err(|e| StegoError::io(path, e))
}

/// 在内存中完成 切分 -> 隐藏 -> 重新组装，返回新的位图字节。
///
/// 文件头和信息头原样复制，只有像素数组前 `16 + 4 * len` 个字节的最低 2 位会改变。
pub fn hide_in_bitmap(image: &[u8], payload: &[u8], keep_trailer: bool) -> StegoResult<Vec<u8>> {
    let mut bitmap = Bitmap::split(image)?;
    hide(payload, bitmap.pixels_mut())?;

    if !keep_trailer && !bitmap.trailer().is_empty() {
        log::warn!(
            "Discarding {} bytes after the pixel array",
            bitmap.trailer().len()
        );
    }
    Ok(bitmap.to_bytes(keep_trailer))
}

/// 在内存中完成 切分 -> 提取，返回隐藏的载荷。
pub fn show_from_bitmap(image: &[u8]) -> StegoResult<Vec<u8>> {
    let bitmap = Bitmap::split(image)?;
    show(bitmap.pixels())
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和载荷文件、调用隐写核心函数隐藏长度和数据，
/// 最后将结果写入目标图像文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或载荷文件。
/// * 图像不是可切分的 24 位位图。
/// * 图像没有足够的空间来隐藏载荷。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    log::info!(
        "Hide {} into {} -> {}",
        args.hidden.display(),
        args.image.display(),
        args.dest.display()
    );

    let picture = load(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = load(&args.hidden).with_context(|| {
        format!(
            "Unable to read hidden file: {}",
            args.hidden.to_string_lossy().red().bold()
        )
    })?;

    let output = hide_in_bitmap(&picture, &payload, args.keep_trailer).with_context(|| {
        format!(
            "Failed to hide {} bytes in {}",
            payload.len().to_string().red().bold(),
            args.image.to_string_lossy().red().bold()
        )
    })?;

    store(&output, &args.dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            args.dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "{} bytes have been successfully hidden and saved: {}",
        payload.len().to_string().green().bold(),
        args.dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Show' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、恢复隐藏的载荷，并写入目标数据文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 图像不是可切分的 24 位位图。
/// * 长度前缀超出像素数组 (图像中没有隐藏数据或已损坏)。
/// * 无法写入到目标数据文件。
pub fn handle_show(args: ShowArgs) -> Result<()> {
    log::info!(
        "Show hidden data from {}, then write it to {}",
        args.image.display(),
        args.output.display()
    );

    let picture = load(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = show_from_bitmap(&picture).with_context(|| {
        format!(
            "Failed to recover hidden data from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    store(&payload, &args.output).with_context(|| {
        format!(
            "Unable to write to target data file: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "{} bytes have been successfully recovered and saved: {}",
        payload.len().to_string().green().bold(),
        args.output.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Info' 命令：打印位图几何信息和隐写容量。
pub fn handle_info(args: InfoArgs) -> Result<()> {
    let picture = load(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let bitmap = Bitmap::split(&picture).with_context(|| {
        format!(
            "Unable to parse bitmap: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let pixel_len = bitmap.pixels().len();
    let max_payload = capacity(pixel_len);

    println!("{}", args.image.to_string_lossy().bold());
    println!("  size:           {} x {}", bitmap.width(), bitmap.height());
    println!("  pixel bytes:    {}", pixel_len);
    println!("  trailing bytes: {}", bitmap.trailer().len());
    println!(
        "  capacity:       {} bytes ({} pixel bytes used at most)",
        max_payload.to_string().green().bold(),
        required_space(max_payload)
    );
    match hidden_length(bitmap.pixels()) {
        Ok(len) => println!(
            "  hidden payload: {} bytes",
            len.to_string().green().bold()
        ),
        Err(e) => {
            log::debug!("No readable length prefix: {}", e);
            println!("  hidden payload: {}", "none".yellow());
        }
    }

    Ok(())
}
