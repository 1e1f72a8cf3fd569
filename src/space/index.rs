/// 空間索引
///
/// 雙向記錄：實體 -> 佔位，位置 -> {(實體, 本地位移)}。
/// 兩邊永遠一致，新增與移除都是 O(佔位格數)。
use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::{HashMap, HashSet};
use specs::Entity;
use vek::Vec2;

use super::error::SpaceError;
use super::footprint::Footprint;
use super::location::Location;
use crate::geom::Point;

/// 佔據某格的實體與它在自身佔位中的位移
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Site<E> {
    pub entity: E,
    pub offset: Point,
}

pub struct SpatialIndex<E = Entity> {
    placement: HashMap<E, Footprint>,
    sites: HashMap<Location, HashSet<Site<E>>>,
}

impl<E> Default for SpatialIndex<E> {
    fn default() -> Self {
        Self {
            placement: HashMap::new(),
            sites: HashMap::new(),
        }
    }
}

impl<E: Copy + Eq + Hash + Debug> SpatialIndex<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以自訂佔位放置實體，已放置過則回傳 `DuplicatePlacement`
    pub fn add_footprint(&mut self, entity: E, footprint: Footprint) -> Result<(), SpaceError> {
        if self.placement.contains_key(&entity) {
            log::error!("重複放置實體 {:?}", entity);
            return Err(SpaceError::DuplicatePlacement {
                entity: format!("{:?}", entity),
            });
        }

        for (offset, loc) in footprint.iter() {
            self.sites
                .entry(loc)
                .or_insert_with(HashSet::new)
                .insert(Site { entity, offset });
        }
        self.placement.insert(entity, footprint);
        Ok(())
    }

    /// 單格放置
    pub fn add(&mut self, entity: E, loc: Location) -> Result<(), SpaceError> {
        self.add_footprint(entity, Footprint::single(loc))
    }

    /// 移動實體：若已放置則先移除再放到新佔位
    pub fn place(&mut self, entity: E, footprint: Footprint) {
        if self.contains(entity) {
            self.detach(entity);
        }
        // 剛移除過，不可能重複
        let _ = self.add_footprint(entity, footprint);
    }

    /// 移除實體並回傳它原本的佔位，未放置則回傳 `UnknownEntity`
    pub fn remove(&mut self, entity: E) -> Result<Footprint, SpaceError> {
        if !self.contains(entity) {
            log::error!("移除未放置的實體 {:?}", entity);
            return Err(SpaceError::UnknownEntity {
                entity: format!("{:?}", entity),
            });
        }
        Ok(self.detach(entity))
    }

    fn detach(&mut self, entity: E) -> Footprint {
        let footprint = match self.placement.remove(&entity) {
            Some(footprint) => footprint,
            None => return Footprint::default(),
        };

        for (offset, loc) in footprint.iter() {
            let site = Site { entity, offset };
            let removed = match self.sites.get_mut(&loc) {
                Some(set) => {
                    let removed = set.remove(&site);
                    if set.is_empty() {
                        self.sites.remove(&loc);
                    }
                    removed
                }
                None => false,
            };
            if !removed {
                panic!("malformed footprint: {:?} missing from site {}", site, loc);
            }
        }
        footprint
    }

    /// 某格上的所有佔據者，回傳的是複本，順序不固定
    pub fn at(&self, loc: Location) -> Vec<Site<E>> {
        match self.sites.get(&loc) {
            Some(set) => set.iter().copied().collect(),
            None => Vec::new(),
        }
    }

    /// 實體是否仍在世界中
    pub fn contains(&self, entity: E) -> bool {
        self.placement.contains_key(&entity)
    }

    /// 實體錨點的位置
    pub fn loc(&self, entity: E) -> Option<Location> {
        self.placement.get(&entity).and_then(|fp| fp.get(Vec2::zero()))
    }

    pub fn footprint(&self, entity: E) -> Option<&Footprint> {
        self.placement.get(&entity)
    }

    pub fn entities(&self) -> impl Iterator<Item = E> + '_ {
        self.placement.keys().copied()
    }

    /// 有佔據者的格子數
    pub fn occupied_cells(&self) -> usize {
        self.sites.len()
    }

    pub fn len(&self) -> usize {
        self.placement.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placement.is_empty()
    }

    pub fn clear(&mut self) {
        self.placement.clear();
        self.sites.clear();
    }
}
