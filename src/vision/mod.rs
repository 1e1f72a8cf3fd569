/// 視野系統模組
///
/// 跨傳送門的六角格陰影投射
pub mod fov;

pub use self::fov::{Angle, Fov, FovObserver};
