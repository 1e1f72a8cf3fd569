use failure::Fail;

use super::location::Location;
use crate::geom::Point;

/// 空間結構的錯誤
///
/// 全部屬於呼叫端違反前置條件，呼叫端應視為致命錯誤往上傳。
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// 實體已經放置在索引中
    #[fail(display = "entity {} is already placed", entity)]
    DuplicatePlacement { entity: String },
    /// 實體不在索引中
    #[fail(display = "entity {} is not placed", entity)]
    UnknownEntity { entity: String },
    /// 傳送門會形成循環
    #[fail(display = "portal at {} would close a portal cycle", location)]
    PortalCycle { location: Location },
    /// 形狀無法與原點相連
    #[fail(display = "shape point {:?} is not contiguous with the origin", point)]
    DisjointShape { point: Point },
    /// 模板步驟不合法
    #[fail(display = "bad footprint step {:?} -> {:?}", parent, pos)]
    BadTemplateStep { parent: Point, pos: Point },
}
