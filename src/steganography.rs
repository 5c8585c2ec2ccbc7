use crate::constants::{BITS_PER_CHAR, BITS_PER_PIXEL};
use crate::error::StegoError;
use image::RgbImage;

/// 像素遍历顺序。
///
/// 编码端和解码端必须使用同一顺序，这是两者之间唯一的同步机制
/// （图像中不存储任何索引或长度信息）。顺序不一致会悄无声息地损坏消息。
/// 最内层固定按通道 0, 1, 2（红、绿、蓝）进行。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Traversal {
    /// 外层按 y 行、内层按 x 列遍历（默认）。
    #[default]
    RowMajor,
    /// 外层按 x 列、内层按 y 行遍历。
    ColumnMajor,
}

impl Traversal {
    /// 按本顺序产生图像中所有 (x, y) 坐标。
    pub fn positions(self, width: u32, height: u32) -> Box<dyn Iterator<Item = (u32, u32)>> {
        match self {
            Traversal::RowMajor => {
                Box::new((0..height).flat_map(move |y| (0..width).map(move |x| (x, y))))
            }
            Traversal::ColumnMajor => {
                Box::new((0..width).flat_map(move |x| (0..height).map(move |y| (x, y))))
            }
        }
    }
}

/// 计算图像的承载容量（比特数）：每通道 1 bit，共 3 × W × H。
pub fn capacity(width: u32, height: u32) -> u64 {
    BITS_PER_PIXEL * u64::from(width) * u64::from(height)
}

/// 将字节序列展开为比特流：按字节顺序，每字节最高位在前。
pub fn to_bits(payload: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(payload.len() * BITS_PER_CHAR);
    for byte in payload {
        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// 清除通道值的最低有效位，再填入一个消息比特。其余 7 bits 保持不变。
fn set_lsb(channel: u8, bit: u8) -> u8 {
    (channel & 0b1111_1110) | bit
}

/// 将消息嵌入图像，返回一幅新的隐写图像。
///
/// 哨兵会被追加到消息末尾作为结束标记，之后整个载荷展开为比特流，
/// 按 `order` 给定的顺序逐通道写入最低有效位。
/// 未被比特流占用的通道与源图像逐位相同。
///
/// # Errors
///
/// 若比特流长度超出图像容量，在写入任何像素之前返回
/// [`StegoError::PayloadTooLarge`]。
pub fn encode(
    image: &RgbImage,
    message: &[u8],
    sentinel: &[u8],
    order: Traversal,
) -> Result<RgbImage, StegoError> {
    let mut payload = Vec::with_capacity(message.len() + sentinel.len());
    payload.extend_from_slice(message);
    payload.extend_from_slice(sentinel);

    let bits = to_bits(&payload);
    let capacity = capacity(image.width(), image.height());
    if bits.len() as u64 > capacity {
        return Err(StegoError::PayloadTooLarge {
            required: bits.len() as u64,
            capacity,
        });
    }

    let mut stego = image.clone();
    let mut bits = bits.iter();

    for (x, y) in order.positions(image.width(), image.height()) {
        let pixel = stego.get_pixel_mut(x, y);
        for channel in pixel.0.iter_mut() {
            match bits.next() {
                Some(&bit) => *channel = set_lsb(*channel, bit),
                // 比特流耗尽，其余像素保持原样。
                None => return Ok(stego),
            }
        }
    }

    Ok(stego)
}

/// 从隐写图像中提取隐藏的消息。
///
/// 按与编码时相同的 `order` 读取每个通道的最低有效位，每集满 8 bits
/// 重组为一个字节。每追加一个字节就检查消息是否以哨兵结尾，
/// 匹配即返回去掉哨兵后的消息。
///
/// 若消息本身包含哨兵子串，提取会在第一次出现处停止——这是既定行为，
/// 调用方应选择不会出现在消息中的哨兵。
///
/// # Errors
///
/// 遍历完整幅图像仍未匹配到哨兵时返回 [`StegoError::SentinelNotFound`]，
/// 不会返回截断的消息。
pub fn decode(image: &RgbImage, sentinel: &[u8], order: Traversal) -> Result<Vec<u8>, StegoError> {
    let mut bit_buf: Vec<u8> = Vec::with_capacity(BITS_PER_CHAR + 2);
    let mut message: Vec<u8> = Vec::new();

    for (x, y) in order.positions(image.width(), image.height()) {
        let pixel = image.get_pixel(x, y);
        for &channel in pixel.0.iter() {
            bit_buf.push(channel & 1);
        }

        // 每个像素最多贡献 3 bits，缓冲区每轮至多凑满一个字节。
        if bit_buf.len() >= BITS_PER_CHAR {
            let byte = bit_buf
                .drain(..BITS_PER_CHAR)
                .fold(0u8, |acc, bit| (acc << 1) | bit);
            message.push(byte);

            if !sentinel.is_empty() && message.ends_with(sentinel) {
                message.truncate(message.len() - sentinel.len());
                return Ok(message);
            }
        }
    }

    Err(StegoError::SentinelNotFound)
}
