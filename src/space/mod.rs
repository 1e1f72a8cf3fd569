/// 空間模組
///
/// 以傳送門縫合的六角格區域（流形）、多格佔位索引
pub mod location;
pub mod manifold;
pub mod footprint;
pub mod index;
pub mod error;

pub use self::{
    location::*,
    manifold::*,
    footprint::*,
    index::*,
    error::SpaceError,
};
