/// 流形：所有區域與傳送門的集合
///
/// 從任一格附近看起來都像平面六角格，整體則不是。
/// 地圖生成時寫入傳送門，遊戲進行中只讀。
use hashbrown::HashMap;

use super::error::SpaceError;
use super::location::{Location, Portal};
use crate::geom::Point;

#[derive(Debug, Clone, Default)]
pub struct Manifold {
    portals: HashMap<Location, Portal>,
}

impl Manifold {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同區域內平移，不解析傳送門
    pub fn offset(&self, origin: Location, vec: Point) -> Location {
        origin.add(vec)
    }

    /// 解析傳送門直到落在沒有傳送門的格子上
    ///
    /// `set_portal` 拒絕任何循環，所以一定會停。
    pub fn traverse(&self, mut loc: Location) -> Location {
        while let Some(portal) = self.portal(loc) {
            loc = loc.beyond(Some(portal));
        }
        loc
    }

    /// 平移後再解析傳送門，通常配合單位向量使用
    pub fn step(&self, origin: Location, vec: Point) -> Location {
        self.traverse(self.offset(origin, vec))
    }

    /// 恰好位於 `loc` 的傳送門
    pub fn portal(&self, loc: Location) -> Option<Portal> {
        self.portals.get(&loc).copied()
    }

    /// 宣告或覆寫傳送門
    ///
    /// 會形成循環的傳送門不寫入，回傳 `PortalCycle`。
    pub fn set_portal(&mut self, loc: Location, portal: Portal) -> Result<(), SpaceError> {
        let mut cur = loc.beyond(Some(portal));
        loop {
            if cur == loc {
                log::error!("傳送門 {} {} 會形成循環", loc, portal);
                return Err(SpaceError::PortalCycle { location: loc });
            }
            match self.portals.get(&cur) {
                Some(next) => cur = cur.beyond(Some(*next)),
                None => break,
            }
        }

        log::debug!("設置傳送門 {} {}", loc, portal);
        self.portals.insert(loc, portal);
        Ok(())
    }

    /// 移除傳送門，回傳原本的傳送門
    pub fn clear_portal(&mut self, loc: Location) -> Option<Portal> {
        self.portals.remove(&loc)
    }

    pub fn portal_count(&self) -> usize {
        self.portals.len()
    }

    pub fn portals(&self) -> impl Iterator<Item = (&Location, &Portal)> {
        self.portals.iter()
    }
}

/// 從平面座標到流形位置的映射
///
/// 名稱取自拓撲學的圖冊與圖卡。視野之外的點沒有對應位置。
pub trait Chart {
    fn at(&self, pt: Point) -> Option<Location>;
}

/// 明確存放的映射，視野計算的輸出
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapChart(pub HashMap<Point, Location>);

impl MapChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pt: Point, loc: Location) {
        self.0.insert(pt, loc);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Point, &Location)> {
        self.0.iter()
    }
}

impl Chart for MapChart {
    fn at(&self, pt: Point) -> Option<Location> {
        self.0.get(&pt).copied()
    }
}

/// 忽略傳送門的平面圖卡，地圖生成時使用
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatChart(pub Location);

impl Chart for FlatChart {
    fn at(&self, pt: Point) -> Option<Location> {
        Some(self.0.add(pt))
    }
}
