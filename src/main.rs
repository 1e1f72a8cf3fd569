use log::{info, warn};
use failure::Error;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use vek::Vec2;

use specs::{Builder, DispatcherBuilder, Entity, World, WorldExt};

use hexrogue::config::CONFIG;
use hexrogue::tick::fov_tick;
use hexrogue::*;

const HOME: ZoneId = ZoneId(1);
const ANNEX: ZoneId = ZoneId(2);

fn init_logging(path: &str) -> Result<(), Error> {
    match log4rs::init_file(path, Default::default()) {
        Ok(()) => Ok(()),
        Err(e) => {
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{}] {}: {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .level(log::LevelFilter::Info)
                .chain(std::io::stderr())
                .apply()?;
            warn!("log4rs 設定 {} 載入失敗，改用 fern: {}", path, e);
            Ok(())
        }
    }
}

/// 兩個房間，東牆上的傳送門通往另一個區域
fn build_level(seed: u64) -> Result<Level, Error> {
    let mut level = Level::new();
    level.fill_room(HOME, Vec2::new(-6, -6), Vec2::new(6, 6));
    level.fill_room(ANNEX, Vec2::new(0, 0), Vec2::new(10, 10));

    let mut rng = Pcg32::seed_from_u64(seed);
    for _ in 0..6 {
        let x = rng.random_range(-4..=4);
        let y = rng.random_range(-4..=4);
        if (x, y) != (0, 0) {
            level.set_terrain(Location::new(HOME, x, y), Terrain::Wall);
        }
    }
    level.set_terrain(Location::new(HOME, -6, 0), Terrain::Door);

    let gate = Location::new(HOME, 6, 0);
    level
        .manifold
        .set_portal(gate, Portal::between(gate, Location::new(ANNEX, 1, 5)))?;
    Ok(level)
}

fn glyph(level: &Level, index: &SpatialIndex, chart: &dyn Chart, pt: Vec2<i32>) -> char {
    let loc = match chart.at(pt) {
        Some(loc) => loc,
        None => return ' ',
    };
    if !index.at(loc).is_empty() {
        return '@';
    }
    match level.terrain(loc) {
        Terrain::Floor if loc.zone == ANNEX => ',',
        Terrain::Floor => '.',
        Terrain::Door => '+',
        Terrain::Grill => '#',
        Terrain::Void => ' ',
        Terrain::Wall => match level.wall_variant(chart, pt) {
            Some(WallJunction::AxisWallA) => '-',
            Some(WallJunction::AxisWallB) => '/',
            Some(WallJunction::DiagonalWall) => '\\',
            _ => 'o',
        },
    }
}

fn dump_memory(world: &World, observer: Entity, radius: i32) {
    let level = world.read_resource::<Level>();
    let index = world.read_resource::<SpatialIndex>();
    let sights = world.read_storage::<Sight>();
    let sight = match sights.get(observer) {
        Some(sight) => sight,
        None => return,
    };

    // 斜向縮排讓六角格看起來正確
    for y in -radius..=radius {
        let mut line = " ".repeat((y + radius) as usize);
        for x in -radius..=radius {
            line.push(glyph(&level, &index, &sight.memory, Vec2::new(x, y)));
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }
}

fn main() -> Result<(), Error> {
    init_logging(&CONFIG.log_config)?;
    info!("設定: {:?}", *CONFIG);

    let level = build_level(7)?;
    let start = Location::new(HOME, 0, 0);

    let mut world = World::new();
    world.register::<Sight>();
    world.register::<Body>();

    let player = world
        .create_entity()
        .with(Sight::new(CONFIG.fov_radius))
        .with(Body::single())
        .build();

    let mut index = SpatialIndex::new();
    {
        let bodies = world.read_storage::<Body>();
        if let Some(body) = bodies.get(player) {
            index.add_footprint(player, level.manifold.footprint_for(body, start))?;
        }
    }
    world.insert(level);
    world.insert(index);

    let mut dispatcher = DispatcherBuilder::new()
        .with(fov_tick::Sys, fov_tick::NAME, &[])
        .build();
    dispatcher.dispatch(&world);
    world.maintain();
    dump_memory(&world, player, CONFIG.fov_radius);

    // 往東走兩步，記憶跟著平移
    let step = Vec2::new(2, 0);
    {
        let level = world.read_resource::<Level>();
        let mut index = world.write_resource::<SpatialIndex>();
        let mut sights = world.write_storage::<Sight>();
        let dest = level.manifold.step(start, step);
        if level.terrain(dest).blocks_move() {
            warn!("{} 無法通行", dest);
        } else {
            index.place(player, Footprint::single(dest));
            if let Some(sight) = sights.get_mut(player) {
                sight.memory.move_fov_origin(step);
            }
        }
    }
    dispatcher.dispatch(&world);
    world.maintain();
    println!();
    dump_memory(&world, player, CONFIG.fov_radius);

    Ok(())
}
