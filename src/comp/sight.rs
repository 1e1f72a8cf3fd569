/// 視野組件
///
/// 每個觀察者各自記住看過的空間，存成自己的圖卡。
use hashbrown::HashMap;
use specs::storage::VecStorage;
use specs::Component;
use vek::Vec2;

use crate::geom::Point;
use crate::space::{Chart, Location};
use crate::vision::FovObserver;

/// 觀察者對已探索空間的記憶
///
/// 鍵是相對於記憶座標系的位移。觀察者移動時只需平移座標系原點，
/// 舊的記憶就會留在正確的相對位置。
#[derive(Debug, Clone, Default)]
pub struct FovMemory {
    relative_pos: Point,
    chart: HashMap<Point, Location>,
}

impl FovMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記錄一格可見位置
    pub fn mark_fov(&mut self, pt: Point, loc: Location) {
        self.chart.insert(pt + self.relative_pos, loc);
    }

    /// 觀察者走了 `vec` 之後平移座標系
    pub fn move_fov_origin(&mut self, vec: Point) {
        self.relative_pos += vec;
    }

    /// 遺忘所有記憶
    pub fn clear_fov(&mut self) {
        self.relative_pos = Vec2::zero();
        self.chart.clear();
    }

    pub fn len(&self) -> usize {
        self.chart.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chart.is_empty()
    }
}

impl Chart for FovMemory {
    fn at(&self, pt: Point) -> Option<Location> {
        self.chart.get(&(pt + self.relative_pos)).copied()
    }
}

/// 擁有視野的實體
#[derive(Debug, Clone, Default)]
pub struct Sight {
    /// 視距
    pub radius: i32,
    /// 每回合重算前是否清空記憶
    pub forgetful: bool,
    pub memory: FovMemory,
}

impl Component for Sight {
    type Storage = VecStorage<Self>;
}

impl Sight {
    pub fn new(radius: i32) -> Self {
        Self {
            radius,
            forgetful: false,
            memory: FovMemory::new(),
        }
    }

    pub fn forgetful(mut self) -> Self {
        self.forgetful = true;
        self
    }
}

impl FovObserver for Sight {
    fn sight_radius(&self) -> i32 {
        self.radius
    }

    fn mark_fov(&mut self, pt: Point, loc: Location) {
        self.memory.mark_fov(pt, loc);
    }
}
