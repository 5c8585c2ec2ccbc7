/// 默认的消息结束标记（哨兵）。
/// 编码时追加到消息末尾，解码时扫描到它即停止。
/// 隐藏端和提取端必须使用完全相同的哨兵，否则提取会失败或提前截断。
pub const DEFAULT_SENTINEL: &str = "!3ND";

/// 每个像素可承载的比特数。
/// 每个 RGB 通道的最低有效位各存 1 bit，共 3 bits。
pub const BITS_PER_PIXEL: u64 = 3;

/// 重组一个字符所需的比特数。
/// 每个字符按 `u8` (8 bits) 处理。
pub const BITS_PER_CHAR: usize = 8;
