//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{ExtractArgs, HideArgs};
use crate::error::StegoError;
use crate::steganography::{decode, encode};
use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};

/// 加载图像并转换为 RGB 像素缓冲。
///
/// 只有 Cargo.toml 中启用的无损格式能被加载；
/// 有损格式 (如 JPEG) 会破坏最低有效位，在此处直接被拒绝。
fn load_rgb(path: &Path) -> Result<RgbImage, StegoError> {
    Ok(image::open(path)?.into_rgb8())
}

/// 省略输出路径时，默认保存为输入文件同目录下的 'stego_<文件名>.png'。
fn default_stego_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map_or_else(|| "image".to_string(), |s| s.to_string_lossy().into_owned());
    image.with_file_name(format!("stego_{stem}.png"))
}

/// 输出文件已存在且未指定 --force 时拒绝覆盖。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和消息、调用核心编码函数将消息与哨兵嵌入像素，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、哨兵和遍历顺序的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或消息文件。
/// * 图像容量不足以容纳消息和哨兵 (`PayloadTooLarge`)。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let message = match (&args.message, &args.message_file) {
        (Some(text), _) => text.clone().into_bytes(),
        (None, Some(path)) => fs::read(path).with_context(|| {
            format!(
                "Unable to read message file: {}",
                path.to_string_lossy().red().bold()
            )
        })?,
        (None, None) => anyhow::bail!("No message given: use --message or --message-file."),
    };

    let picture = load_rgb(&args.image).with_context(|| {
        format!(
            "Unable to load image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let dest = args
        .dest
        .unwrap_or_else(|| default_stego_path(&args.image));
    ensure_writable(&dest, args.force)?;

    let stego = encode(&picture, &message, args.sentinel.as_bytes(), args.order).with_context(
        || {
            format!(
                "Failed to hide the message in '{}'.",
                args.image.to_string_lossy().red().bold()
            )
        },
    )?;

    stego.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Extract' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用核心解码函数提取消息，
/// 然后写入目标文本文件，或在未指定输出路径时直接打印到终端。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、哨兵和遍历顺序的 `ExtractArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 图像中找不到哨兵 (`SentinelNotFound`)。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法写入到目标文本文件。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let picture = load_rgb(&args.image).with_context(|| {
        format!(
            "Unable to load image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = decode(&picture, args.sentinel.as_bytes(), args.order).with_context(|| {
        format!(
            "Failed to extract a hidden message from '{}'. \nThe image may not contain one, or the sentinel/order differs from the one used to hide it.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    match &args.text {
        Some(path) => {
            ensure_writable(path, args.force)?;
            fs::write(path, &message).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The message has been successfully extracted and saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
        None => {
            println!(
                "Message successfully extracted: {}",
                String::from_utf8_lossy(&message).green().bold()
            );
        }
    }

    Ok(())
}
