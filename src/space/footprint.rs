/// 多格實體的佔位
///
/// 傳送門讓空間不再是歐氏的，所以實體各格對應的位置不能直接相加，
/// 必須沿著模板逐格走出來並明確存下。
use hashbrown::{HashMap, HashSet};
use vek::Vec2;

use super::error::SpaceError;
use super::location::Location;
use super::manifold::Manifold;
use crate::geom::{hex_dist, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FootprintStep {
    parent: Point,
    pos: Point,
}

/// 預先算好的展開順序：每一步都從已知的父格走一格到子格
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FootprintTemplate {
    steps: Vec<FootprintStep>,
}

impl FootprintTemplate {
    /// 只有原點一格的模板
    pub fn single() -> Self {
        Self::default()
    }

    /// 由點集合建立模板
    ///
    /// 原點 (0, 0) 一定包含在內，其餘點必須以六角格相鄰關係與原點相連。
    pub fn from_shape(shape: &[Point]) -> Result<Self, SpaceError> {
        let mut result = Self::single();
        let origin: Point = Vec2::zero();

        // 依輸入順序處理，讓結果可重現
        let mut pending: Vec<Point> = Vec::new();
        for &pt in shape {
            if pt != origin && !pending.contains(&pt) {
                pending.push(pt);
            }
        }

        let mut parents = vec![origin];
        while !pending.is_empty() {
            let before = pending.len();
            let mut i = 0;
            while i < pending.len() {
                let pt = pending[i];
                match parents.iter().find(|&&parent| hex_dist(parent, pt) == 1) {
                    Some(&parent) => {
                        result.steps.push(FootprintStep { parent, pos: pt });
                        parents.push(pt);
                        pending.remove(i);
                    }
                    None => i += 1,
                }
            }
            if pending.len() == before {
                return Err(SpaceError::DisjointShape { point: pending[0] });
            }
        }

        Ok(result)
    }

    /// 手動加入一步，之後應呼叫 `validate`
    pub fn add_step(&mut self, parent: Point, pos: Point) {
        self.steps.push(FootprintStep { parent, pos });
    }

    /// 檢查每一步的父格都已展開且距離為 1
    pub fn validate(&self) -> Result<(), SpaceError> {
        let mut valid_parents: HashSet<Point> = HashSet::new();
        valid_parents.insert(Vec2::zero());
        for step in &self.steps {
            if !valid_parents.contains(&step.parent) || hex_dist(step.parent, step.pos) != 1 {
                return Err(SpaceError::BadTemplateStep {
                    parent: step.parent,
                    pos: step.pos,
                });
            }
            valid_parents.insert(step.pos);
        }
        Ok(())
    }

    /// 模板涵蓋的格數（含原點）
    pub fn len(&self) -> usize {
        self.steps.len() + 1
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(Vec2::zero()).chain(self.steps.iter().map(|s| s.pos))
    }
}

/// 實體的形狀能力
pub trait Shaped {
    fn footprint_template(&self) -> &FootprintTemplate;
}

impl Shaped for FootprintTemplate {
    fn footprint_template(&self) -> &FootprintTemplate {
        self
    }
}

/// 實體各格的本地位移 -> 世界位置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Footprint(HashMap<Point, Location>);

impl Footprint {
    /// 單格佔位 {(0, 0): loc}
    pub fn single(loc: Location) -> Self {
        let mut cells = HashMap::new();
        cells.insert(Vec2::zero(), loc);
        Self(cells)
    }

    /// 錨點，也就是 (0, 0) 所在的位置
    pub fn anchor(&self) -> Option<Location> {
        self.get(Vec2::zero())
    }

    pub fn get(&self, offset: Point) -> Option<Location> {
        self.0.get(&offset).copied()
    }

    pub fn insert(&mut self, offset: Point, loc: Location) {
        self.0.insert(offset, loc);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, Location)> + '_ {
        self.0.iter().map(|(&offset, &loc)| (offset, loc))
    }
}

impl FromIterator<(Point, Location)> for Footprint {
    fn from_iter<I: IntoIterator<Item = (Point, Location)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Manifold {
    /// 從 `loc` 展開模板，每一格都從父格經由傳送門走過去
    pub fn make_footprint(&self, template: &FootprintTemplate, loc: Location) -> Footprint {
        let mut result = Footprint::single(loc);
        for step in &template.steps {
            let parent_loc = match result.get(step.parent) {
                Some(parent_loc) => parent_loc,
                None => panic!("invalid footprint template: unexpanded parent {:?}", step.parent),
            };
            result.insert(step.pos, self.step(parent_loc, step.pos - step.parent));
        }
        result
    }

    /// 向實體詢問形狀並投影到流形上
    pub fn footprint_for<S: Shaped + ?Sized>(&self, entity: &S, loc: Location) -> Footprint {
        self.make_footprint(entity.footprint_template(), loc)
    }
}
