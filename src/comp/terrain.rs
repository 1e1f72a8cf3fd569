/// 地形與關卡
///
/// 關卡持有流形與每格的地形，關卡結束時整個丟棄。
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::geom::{hex_neighbor_mask, hex_wall_type, Point, WallJunction};
use crate::space::{Chart, Location, Manifold, MapChart, ZoneId};
use crate::vision::Fov;

/// 地形種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// 虛空 - 地圖以外，不該被看到
    Void,
    /// 地板
    Floor,
    /// 牆
    Wall,
    /// 門 - 可通行但遮擋視線
    Door,
    /// 柵欄 - 不可通行但可看穿
    Grill,
}

impl Default for Terrain {
    fn default() -> Self {
        Terrain::Void
    }
}

impl Terrain {
    pub fn blocks_sight(self) -> bool {
        matches!(self, Terrain::Void | Terrain::Wall | Terrain::Door)
    }

    pub fn blocks_move(self) -> bool {
        matches!(self, Terrain::Void | Terrain::Wall | Terrain::Grill)
    }

    /// 繪製牆面接合時視為牆
    pub fn shapes_walls(self) -> bool {
        matches!(self, Terrain::Wall | Terrain::Door)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Level {
    pub manifold: Manifold,
    terrain: HashMap<Location, Terrain>,
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    /// 沒有設定過的格子是虛空
    pub fn terrain(&self, loc: Location) -> Terrain {
        self.terrain.get(&loc).copied().unwrap_or_default()
    }

    pub fn set_terrain(&mut self, loc: Location, terrain: Terrain) {
        self.terrain.insert(loc, terrain);
    }

    /// 在區域內挖一個房間：邊框是牆，內部是地板，範圍含兩端
    pub fn fill_room(&mut self, zone: ZoneId, min: Point, max: Point) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                let edge = x == min.x || x == max.x || y == min.y || y == max.y;
                let terrain = if edge { Terrain::Wall } else { Terrain::Floor };
                self.set_terrain(Location::new(zone, x, y), terrain);
            }
        }
    }

    /// 單次視野計算，回傳可見範圍的圖卡
    pub fn fov(&self, origin: Location, radius: i32) -> MapChart {
        let mut seen = MapChart::new();
        Fov::new(&self.manifold).run(
            origin,
            radius,
            |loc| self.terrain(loc).blocks_sight(),
            |pt, loc| seen.insert(pt, loc),
        );
        seen
    }

    /// 圖卡上 `pt` 處牆面的接合型態，非牆則為 None
    pub fn wall_variant<C: Chart + ?Sized>(&self, chart: &C, pt: Point) -> Option<WallJunction> {
        let here = chart.at(pt).map(|loc| self.terrain(loc))?;
        if here != Terrain::Wall {
            return None;
        }
        let mask = hex_neighbor_mask(pt, |p| {
            chart
                .at(p)
                .map(|loc| self.terrain(loc).shapes_walls())
                .unwrap_or(false)
        });
        Some(hex_wall_type(mask))
    }

    pub fn cell_count(&self) -> usize {
        self.terrain.len()
    }
}
