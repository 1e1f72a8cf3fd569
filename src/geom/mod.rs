/// 六角格幾何模組
///
/// 純函式：距離、方向、環狀枚舉、牆面接合分類
pub mod hex;
pub mod test_hex;

pub use self::hex::*;
