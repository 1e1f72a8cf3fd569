/// 位置與傳送門
///
/// 位置是值型別，相等就是同區域同座標，跨傳送門不做任何正規化。
use std::fmt;

use serde::{Deserialize, Serialize};
use vek::Vec2;

use crate::geom::Point;

/// 區域識別碼，一個區域內部是普通的歐氏六角格
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId(pub u16);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 世界中的一格
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub zone: ZoneId,
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub fn new(zone: ZoneId, x: i32, y: i32) -> Self {
        Self { zone, x, y }
    }

    /// 同區域內平移，不理會傳送門
    pub fn add(self, vec: Point) -> Self {
        Self {
            zone: self.zone,
            x: self.x + vec.x,
            y: self.y + vec.y,
        }
    }

    /// 穿過傳送門後的位置
    pub fn beyond(self, portal: Option<Portal>) -> Self {
        match portal {
            Some(portal) => Self {
                zone: portal.zone,
                x: self.x + portal.dx,
                y: self.y + portal.dy,
            },
            None => self,
        }
    }

    /// 區域內座標
    pub fn pos(self) -> Point {
        Vec2::new(self.x, self.y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}: {}, {})", self.zone, self.x, self.y)
    }
}

/// 傳送門：位移 (dx, dy) 與目標區域
///
/// 穿過傳送門的座標為 (x + dx, y + dy)，不旋轉。
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Portal {
    pub dx: i32,
    pub dy: i32,
    pub zone: ZoneId,
}

impl Portal {
    pub fn new(dx: i32, dy: i32, zone: ZoneId) -> Self {
        Self { dx, dy, zone }
    }

    /// 把 `from` 接到 `to` 的傳送門
    pub fn between(from: Location, to: Location) -> Self {
        Self {
            dx: to.x - from.x,
            dy: to.y - from.y,
            zone: to.zone,
        }
    }
}

impl fmt::Display for Portal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "->({}: {}, {})", self.zone, self.dx, self.dy)
    }
}

/// 建立位置的簡寫
pub fn loc(x: i32, y: i32, zone: u16) -> Location {
    Location::new(ZoneId(zone), x, y)
}

/// 建立傳送門的簡寫
pub fn port(dx: i32, dy: i32, target_zone: u16) -> Portal {
    Portal::new(dx, dy, ZoneId(target_zone))
}
