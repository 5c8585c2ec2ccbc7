//! # 错误类型模块
//!
//! 定义隐写编解码核心可能产生的所有错误。
//! 三种错误对当前操作都是终止性的：不返回部分结果，核心内部不做重试。

use thiserror::Error;

/// 隐写编解码核心的错误类型。
#[derive(Debug, Error)]
pub enum StegoError {
    /// 比特流长度超出图像容量。在写入任何像素之前检测到。
    #[error(
        "The message is too large to hide within this image. \
         Required: {required} bits, Available: {capacity} bits"
    )]
    PayloadTooLarge { required: u64, capacity: u64 },

    /// 遍历完整幅图像也未匹配到哨兵。
    /// 说明图像不含隐藏消息，或哨兵/遍历顺序与隐藏时不一致。
    #[error("No hidden message found: the sentinel never appeared in the extracted data")]
    SentinelNotFound,

    /// 图像加载失败（文件不存在、不可读或格式不受支持）。
    #[error("Failed to load the image")]
    ImageLoad(#[from] image::ImageError),
}
