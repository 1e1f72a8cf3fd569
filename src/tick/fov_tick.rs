use specs::{
    shred::{ResourceId, World}, Entities, Join, ReadExpect, System, SystemData,
    WriteStorage,
};

use crate::comp::*;
use crate::space::SpatialIndex;
use crate::vision::Fov;

/// 在 dispatcher 中註冊用的名稱
pub const NAME: &str = "fov";

#[derive(SystemData)]
pub struct FovRead<'a> {
    entities: Entities<'a>,
    level: ReadExpect<'a, Level>,
    index: ReadExpect<'a, SpatialIndex>,
}

#[derive(SystemData)]
pub struct FovWrite<'a> {
    sights: WriteStorage<'a, Sight>,
}

/// 每回合為每個已放置的觀察者重算一次視野
#[derive(Default)]
pub struct Sys;

impl<'a> System<'a> for Sys {
    type SystemData = (
        FovRead<'a>,
        FovWrite<'a>,
    );

    fn run(&mut self, (tr, mut tw): Self::SystemData) {
        let fov = Fov::new(&tr.level.manifold);
        let mut observers = 0;

        for (ent, sight) in (&tr.entities, &mut tw.sights).join() {
            // 不在世界中的觀察者（死亡、尚未放置）跳過
            let origin = match tr.index.loc(ent) {
                Some(origin) => origin,
                None => continue,
            };
            if sight.forgetful {
                sight.memory.clear_fov();
            }
            fov.observe(origin, sight, |loc| tr.level.terrain(loc).blocks_sight());
            observers += 1;
        }

        log::debug!("視野更新：{} 個觀察者", observers);
    }
}
