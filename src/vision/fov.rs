/// 六角格遞迴陰影投射視野
///
/// 以環為單位向外擴張。每一環上的弧依「群組」切段：相同遮擋狀態且相同傳送門的
/// 連續格子視為一段。不遮擋的段落往外一環繼續處理，若該段落在傳送門上，
/// 外一環的原點改為穿過傳送門後的位置，視野因此能無縫跨越區域接縫。
use std::convert::Infallible;

use vek::Vec2;

use crate::geom::{hex_circle_point, Point};
use crate::space::{Location, Manifold, Portal};

/// 視野觀察者能力：擁有視距並記住看過的格子
pub trait FovObserver {
    fn sight_radius(&self) -> i32;
    fn mark_fov(&mut self, pt: Point, loc: Location);
}

/// 環上的角度：沿周長的小數位置加上所在的環
///
/// 用小數表示才能在環與環之間精確保留不足一格寬的縫隙。
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Angle {
    pub pos: f64,
    pub radius: i32,
}

impl Angle {
    pub fn new(pos: f64, radius: i32) -> Self {
        Self { pos, radius }
    }

    /// 四捨五入到最近的格子
    pub fn winding_index(&self) -> i32 {
        (self.pos + 0.5).floor() as i32
    }

    pub fn end_index(&self) -> i32 {
        (self.pos + 0.5).ceil() as i32
    }

    /// 弧是否還沒走完
    pub fn is_below(&self, end: &Angle) -> bool {
        self.winding_index() < end.end_index()
    }

    /// 前進到下一個半格邊界，也就是下一格
    pub fn next(&self) -> Angle {
        Angle {
            pos: (self.pos + 0.5).floor() + 0.5,
            radius: self.radius,
        }
    }

    /// 投影到外一環，保持相同的真實角度
    pub fn above(&self) -> Angle {
        Angle {
            pos: self.pos * (self.radius + 1) as f64 / self.radius as f64,
            radius: self.radius + 1,
        }
    }

    pub fn point(&self) -> Point {
        hex_circle_point(self.radius, self.winding_index())
    }
}

/// 可以整段處理的相鄰格子：遮擋狀態與傳送門都相同
#[derive(Copy, Clone, Debug, PartialEq)]
struct Group {
    blocks_sight: bool,
    portal: Option<Portal>,
}

/// 待處理的弧 [begin, end)
#[derive(Copy, Clone, Debug)]
struct Sweep {
    origin: Location,
    begin: Angle,
    end: Angle,
}

pub struct Fov<'a> {
    manifold: &'a Manifold,
}

impl<'a> Fov<'a> {
    pub fn new(manifold: &'a Manifold) -> Self {
        Self { manifold }
    }

    /// 計算 `origin` 周圍 `radius` 內的視野
    ///
    /// 每個可見的 (相對位移, 位置) 都會呼叫 `mark_seen`，原點本身必定包含在內。
    /// 同一格可能被呼叫不只一次。
    pub fn run<B, M>(&self, origin: Location, radius: i32, mut blocks_sight: B, mark_seen: M)
    where
        B: FnMut(Location) -> bool,
        M: FnMut(Point, Location),
    {
        let result: Result<(), Infallible> =
            self.try_run(origin, radius, |loc| Ok(blocks_sight(loc)), mark_seen);
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// 遮擋判斷可能失敗的版本，第一個錯誤會中止計算並原樣回傳
    pub fn try_run<B, M, E>(
        &self,
        origin: Location,
        radius: i32,
        mut blocks_sight: B,
        mut mark_seen: M,
    ) -> Result<(), E>
    where
        B: FnMut(Location) -> Result<bool, E>,
        M: FnMut(Point, Location),
    {
        mark_seen(Vec2::zero(), origin);

        // 以堆疊取代遞迴：先壓剩餘的弧再壓外一環，處理順序與遞迴相同
        let mut stack = vec![Sweep {
            origin,
            begin: Angle::new(0.0, 1),
            end: Angle::new(6.0, 1),
        }];
        let mut marked = 0usize;

        while let Some(sweep) = stack.pop() {
            if sweep.begin.radius > radius {
                continue;
            }

            let group = self.group(&mut blocks_sight, sweep.origin, sweep.begin.point())?;
            let mut a = sweep.begin;
            let mut split = None;
            while a.is_below(&sweep.end) {
                let pt = a.point();
                if self.group(&mut blocks_sight, sweep.origin, pt)? != group {
                    split = Some(a);
                    break;
                }
                mark_seen(pt, self.manifold.step(sweep.origin, pt));
                marked += 1;
                a = a.next();
            }

            let end = match split {
                Some(a) => {
                    // 地形改變，剩下的部分另起一段
                    stack.push(Sweep {
                        origin: sweep.origin,
                        begin: a,
                        end: sweep.end,
                    });
                    a
                }
                None => sweep.end,
            };
            if !group.blocks_sight {
                stack.push(Sweep {
                    origin: sweep.origin.beyond(group.portal),
                    begin: sweep.begin.above(),
                    end: end.above(),
                });
            }
        }

        log::trace!("視野 {} 半徑 {}：標記 {} 次", origin, radius, marked);
        Ok(())
    }

    /// 以觀察者的視距計算視野並寫入它的記憶
    pub fn observe<O, B>(&self, origin: Location, observer: &mut O, blocks_sight: B)
    where
        O: FovObserver + ?Sized,
        B: FnMut(Location) -> bool,
    {
        let radius = observer.sight_radius();
        self.run(origin, radius, blocks_sight, |pt, loc| observer.mark_fov(pt, loc));
    }

    fn group<B, E>(&self, blocks_sight: &mut B, origin: Location, offset: Point) -> Result<Group, E>
    where
        B: FnMut(Location) -> Result<bool, E>,
    {
        let raw = origin.add(offset);
        Ok(Group {
            blocks_sight: blocks_sight(self.manifold.traverse(raw))?,
            portal: self.manifold.portal(raw),
        })
    }
}
