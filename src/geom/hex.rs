/// 六角格幾何
///
/// 座標系：六角格疊在直角座標上，(1, 1) 與 (-1, -1) 為相鄰格。
/// 同號位移的距離為 max(|dx|, |dy|)，異號則為 |dx| + |dy|。
use vek::Vec2;
use serde::{Deserialize, Serialize};

/// 格點 / 相對位移
pub type Point = Vec2<i32>;

/// 六個方向的單位向量，從 (-1, -1) 軸開始順時針排列
pub const HEX_DIRS: [(i32, i32); 6] = [(-1, -1), (0, -1), (1, 0), (1, 1), (0, 1), (-1, 0)];

/// 取得第 `dir` 個方向的單位向量（自動取模）
pub fn hex_dir_vec(dir: usize) -> Point {
    let (x, y) = HEX_DIRS[dir % 6];
    Vec2::new(x, y)
}

/// 六角格距離
pub fn hex_dist(p1: Point, p2: Point) -> i32 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    if dx.signum() == dy.signum() {
        dx.abs().max(dy.abs())
    } else {
        dx.abs() + dy.abs()
    }
}

/// 單位向量對應的方向索引，非單位向量回傳 None
pub fn hex_dir(vec: Point) -> Option<usize> {
    HEX_DIRS.iter().position(|&(x, y)| vec.x == x && vec.y == y)
}

/// 半徑 `radius` 的環上第 `winding_index` 個點
///
/// 從 HEX_DIRS[0] 方向的頂點開始順時針繞行，周長為 6·radius。
/// 索引會對周長取模，所以負數與超出一圈的索引都合法。
pub fn hex_circle_point(radius: i32, winding_index: i32) -> Point {
    if radius == 0 {
        return Vec2::zero();
    }
    let index = winding_index.rem_euclid(radius * 6);
    let sector = (index / radius) as usize;
    let offset = index % radius;
    hex_dir_vec(sector) * radius + hex_dir_vec(sector + 2) * offset
}

/// 環的周長
pub fn hex_circumference(radius: i32) -> i32 {
    if radius == 0 {
        1
    } else {
        radius * 6
    }
}

/// 牆面接合型態，用於挑選牆壁圖塊
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallJunction {
    /// 柱子，沒有明確走向
    Pillar = 0,
    /// 沿 x 軸的牆 (方向 2, 5)
    AxisWallA = 1,
    /// 沿 y 軸的牆 (方向 1, 4)
    AxisWallB = 2,
    /// 沿對角線的牆 (方向 0, 3)
    DiagonalWall = 3,
}

impl WallJunction {
    /// 圖塊索引偏移
    pub fn tile_offset(self) -> usize {
        self as usize
    }
}

use self::WallJunction::{AxisWallA as A, AxisWallB as B, DiagonalWall as D, Pillar as P};

/// 鄰居牆面遮罩 -> 接合型態。數值為手動挑選，不要改。
const WALL_JUNCTIONS: [WallJunction; 64] = [
    P, D, B, P, A, P, P, P,
    D, D, P, D, P, D, P, D,
    B, P, B, B, P, P, B, B,
    P, D, B, P, P, D, B, P,
    A, P, P, P, A, A, A, A,
    P, D, P, D, A, P, A, P,
    P, P, B, B, A, A, P, P,
    P, D, B, P, A, P, P, P,
];

/// 由 6-bit 鄰居遮罩決定牆面圖塊型態，位元 i 對應 HEX_DIRS[i]
pub fn hex_wall_type(neighbor_mask: u8) -> WallJunction {
    WALL_JUNCTIONS[(neighbor_mask & 0x3f) as usize]
}

/// 建立鄰居遮罩
pub fn hex_neighbor_mask(pt: Point, mut is_wall: impl FnMut(Point) -> bool) -> u8 {
    let mut mask = 0u8;
    for dir in 0..6 {
        if is_wall(pt + hex_dir_vec(dir)) {
            mask |= 1 << dir;
        }
    }
    mask
}
