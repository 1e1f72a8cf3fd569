/// Hex Rogue Library
///
/// 以傳送門縫合的六角格世界：幾何、流形、空間索引與跨傳送門視野

pub mod geom;
pub mod space;
pub mod vision;
pub mod comp;
pub mod tick;
pub mod config;

// Re-export commonly used types
pub use crate::geom::*;
pub use crate::space::*;
pub use crate::vision::*;
pub use crate::comp::*;
