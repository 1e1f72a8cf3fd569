/// 組件與關卡測試
#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::geom::{hex_dist, Point, WallJunction};
    use crate::space::*;
    use crate::vision::Fov;
    use vek::Vec2;

    fn pt(x: i32, y: i32) -> Point {
        Vec2::new(x, y)
    }

    fn small_room() -> Level {
        let mut level = Level::new();
        level.fill_room(ZoneId(1), pt(-2, -2), pt(2, 2));
        level
    }

    #[test]
    fn test_fov_memory_follows_observer() {
        let mut memory = FovMemory::new();
        assert!(memory.is_empty());

        memory.mark_fov(pt(1, 0), loc(1, 0, 1));
        memory.mark_fov(pt(0, 0), loc(0, 0, 1));
        assert_eq!(memory.at(pt(1, 0)), Some(loc(1, 0, 1)));

        // 往東走一格後，原本在東邊的格子變成腳下
        memory.move_fov_origin(pt(1, 0));
        assert_eq!(memory.at(pt(0, 0)), Some(loc(1, 0, 1)));
        assert_eq!(memory.at(pt(-1, 0)), Some(loc(0, 0, 1)));
        assert_eq!(memory.at(pt(1, 0)), None);

        // 新標記寫在新的座標系
        memory.mark_fov(pt(1, 0), loc(2, 0, 1));
        assert_eq!(memory.at(pt(1, 0)), Some(loc(2, 0, 1)));
        assert_eq!(memory.len(), 3);

        memory.clear_fov();
        assert!(memory.is_empty());
        assert_eq!(memory.at(pt(0, 0)), None);
        memory.mark_fov(pt(0, 0), loc(5, 5, 1));
        assert_eq!(memory.at(pt(0, 0)), Some(loc(5, 5, 1)));
    }

    #[test]
    fn test_terrain_predicates() {
        assert_eq!(Terrain::default(), Terrain::Void);

        assert!(Terrain::Void.blocks_sight());
        assert!(Terrain::Wall.blocks_sight());
        assert!(Terrain::Door.blocks_sight());
        assert!(!Terrain::Floor.blocks_sight());
        assert!(!Terrain::Grill.blocks_sight());

        assert!(Terrain::Grill.blocks_move());
        assert!(Terrain::Wall.blocks_move());
        assert!(!Terrain::Door.blocks_move());
        assert!(!Terrain::Floor.blocks_move());

        assert!(Terrain::Door.shapes_walls());
        assert!(!Terrain::Grill.shapes_walls());
    }

    #[test]
    fn test_fill_room() {
        let level = small_room();
        assert_eq!(level.cell_count(), 25);
        assert_eq!(level.terrain(loc(0, 0, 1)), Terrain::Floor);
        assert_eq!(level.terrain(loc(1, -1, 1)), Terrain::Floor);
        assert_eq!(level.terrain(loc(2, 0, 1)), Terrain::Wall);
        assert_eq!(level.terrain(loc(-2, -2, 1)), Terrain::Wall);
        assert_eq!(level.terrain(loc(3, 0, 1)), Terrain::Void);
        // 別的區域沒有任何東西
        assert_eq!(level.terrain(loc(0, 0, 2)), Terrain::Void);
    }

    #[test]
    fn test_level_fov_shadow() {
        let mut level = Level::new();
        level.fill_room(ZoneId(1), pt(-6, -6), pt(6, 6));
        level.set_terrain(loc(2, 0, 1), Terrain::Wall);

        let seen = level.fov(loc(0, 0, 1), 5);
        assert_eq!(seen.at(pt(0, 0)), Some(loc(0, 0, 1)));
        assert_eq!(seen.at(pt(2, 0)), Some(loc(2, 0, 1)));
        assert_eq!(seen.at(pt(-5, 0)), Some(loc(-5, 0, 1)));
        assert_eq!(seen.at(pt(3, 0)), None);
        assert_eq!(seen.at(pt(4, 0)), None);
        assert!(seen.iter().all(|(p, _)| hex_dist(Vec2::zero(), *p) <= 5));
    }

    #[test]
    fn test_level_fov_through_portal() {
        let mut level = Level::new();
        level.fill_room(ZoneId(1), pt(-6, -6), pt(6, 6));
        level.fill_room(ZoneId(2), pt(0, 0), pt(10, 10));
        let gate = loc(6, 0, 1);
        level
            .manifold
            .set_portal(gate, Portal::between(gate, loc(1, 5, 2)))
            .unwrap();

        let seen = level.fov(loc(4, 0, 1), 2);
        // 門所在的牆被穿過，看到的是另一區的地板
        assert_eq!(seen.at(pt(2, 0)), Some(loc(1, 5, 2)));
        assert_eq!(seen.at(pt(2, 1)), Some(loc(6, 1, 1)));
        assert_eq!(seen.at(pt(1, 0)), Some(loc(5, 0, 1)));
    }

    #[test]
    fn test_wall_variant() {
        let level = small_room();
        let chart = FlatChart(loc(0, 0, 1));

        assert_eq!(level.wall_variant(&chart, pt(2, 0)), Some(WallJunction::AxisWallB));
        assert_eq!(level.wall_variant(&chart, pt(0, 2)), Some(WallJunction::AxisWallA));
        assert_eq!(level.wall_variant(&chart, pt(2, 2)), Some(WallJunction::Pillar));
        assert_eq!(level.wall_variant(&chart, pt(0, 0)), None);
        assert_eq!(level.wall_variant(&chart, pt(5, 5)), None);

        // 沒看過的格子不畫
        let empty = MapChart::new();
        assert_eq!(level.wall_variant(&empty, pt(2, 0)), None);
    }

    #[test]
    fn test_sight_observe() {
        let level = small_room();
        let mut sight = Sight::new(3);
        Fov::new(&level.manifold).observe(loc(0, 0, 1), &mut sight, |l| {
            level.terrain(l).blocks_sight()
        });

        assert_eq!(sight.memory.at(pt(0, 0)), Some(loc(0, 0, 1)));
        assert_eq!(sight.memory.at(pt(1, 1)), Some(loc(1, 1, 1)));
        assert_eq!(sight.memory.at(pt(2, 0)), Some(loc(2, 0, 1)));
        assert!(!sight.forgetful);
        assert!(Sight::new(3).forgetful().forgetful);
    }

    #[test]
    fn test_body_footprint() {
        assert_eq!(Body::single().template.len(), 1);

        let body = Body::from_shape(&[pt(0, 0), pt(1, 0), pt(2, 0)]).unwrap();
        assert_eq!(body.template.len(), 3);

        let mut mf = Manifold::new();
        mf.set_portal(loc(1, 0, 1), port(10, 10, 2)).unwrap();
        let fp = mf.footprint_for(&body, loc(0, 0, 1));
        assert_eq!(fp.anchor(), Some(loc(0, 0, 1)));
        assert_eq!(fp.get(pt(1, 0)), Some(loc(11, 10, 2)));
        // 第二格從第一格出發，已經在另一區
        assert_eq!(fp.get(pt(2, 0)), Some(loc(12, 10, 2)));

        assert_eq!(
            Body::from_shape(&[pt(3, 3)]),
            Err(SpaceError::DisjointShape { point: pt(3, 3) })
        );
    }
}
