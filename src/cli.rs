//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::DEFAULT_SENTINEL;
use crate::steganography::Traversal;
use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，在无损格式图像 (如 PNG, BMP) 中隐藏或提取以哨兵标记结尾的文本消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，在无损格式图像 (如 PNG, BMP) 中隐藏或提取以哨兵标记结尾的文本消息。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏) 和 extract (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像 (如 PNG, BMP) 中隐藏一条文本消息。
    Hide(HideArgs),

    /// 从经过隐写的图像中提取隐藏的消息。
    Extract(ExtractArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的消息文本。与 --message-file 二选一。
    #[arg(
        short,
        long,
        conflicts_with = "message_file",
        required_unless_present = "message_file"
    )]
    pub message: Option<String>,

    /// 包含要隐藏的消息的文本文件路径。与 --message 二选一。
    #[arg(long)]
    pub message_file: Option<PathBuf>,

    /// 隐写完成后，保存结果图像的输出路径。
    /// 省略时默认保存为输入文件同目录下的 'stego_<文件名>.png'。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 消息结束哨兵。提取时必须使用相同的值。
    #[arg(short, long, default_value = DEFAULT_SENTINEL)]
    pub sentinel: String,

    /// 像素遍历顺序。提取时必须使用相同的值。
    #[arg(long, value_enum, default_value_t = Traversal::RowMajor)]
    pub order: Traversal,

    /// 若输出文件已存在则直接覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 已隐藏消息的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 提取消息后，保存文本内容的输出路径。
    /// 省略时将消息直接打印到终端。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 消息结束哨兵。必须与隐藏时使用的值相同。
    #[arg(short, long, default_value = DEFAULT_SENTINEL)]
    pub sentinel: String,

    /// 像素遍历顺序。必须与隐藏时使用的值相同。
    #[arg(long, value_enum, default_value_t = Traversal::RowMajor)]
    pub order: Traversal,

    /// 若输出文件已存在则直接覆盖。
    #[arg(short, long)]
    pub force: bool,
}
