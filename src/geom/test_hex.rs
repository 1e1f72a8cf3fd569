/// 六角格幾何測試
#[cfg(test)]
mod tests {
    use super::super::*;
    use hashbrown::HashSet;
    use vek::Vec2;

    fn pt(x: i32, y: i32) -> Point {
        Vec2::new(x, y)
    }

    #[test]
    fn test_hex_dist() {
        assert_eq!(hex_dist(pt(10, 10), pt(10, 10)), 0);
        assert_eq!(hex_dist(pt(3, -3), pt(2, -3)), 1);
        assert_eq!(hex_dist(pt(3, -3), pt(4, -2)), 1);
        assert_eq!(hex_dist(pt(3, -3), pt(4, -4)), 2);
        assert_eq!(hex_dist(pt(0, 0), pt(3, 5)), 5);
        assert_eq!(hex_dist(pt(0, 0), pt(-3, 5)), 8);
    }

    #[test]
    fn test_hex_dist_symmetry() {
        for ax in -4..=4 {
            for ay in -4..=4 {
                for (bx, by) in [(0, 0), (2, -1), (-3, -3), (1, 4)] {
                    let (a, b) = (pt(ax, ay), pt(bx, by));
                    assert_eq!(hex_dist(a, b), hex_dist(b, a));
                }
                assert_eq!(hex_dist(pt(ax, ay), pt(ax, ay)), 0);
            }
        }
    }

    #[test]
    fn test_dirs_are_unit_neighbors() {
        for dir in 0..6 {
            let v = hex_dir_vec(dir);
            assert_eq!(hex_dist(Vec2::zero(), v), 1);
            assert_eq!(hex_dir(v), Some(dir));
            // 對向方向
            assert_eq!(hex_dir_vec(dir + 3), -v);
        }
        assert_eq!(hex_dir(pt(1, -1)), None);
        assert_eq!(hex_dir(pt(0, 0)), None);
    }

    #[test]
    fn test_ring_completeness() {
        assert_eq!(hex_circle_point(0, 0), pt(0, 0));
        assert_eq!(hex_circumference(0), 1);

        for radius in 1..8 {
            let ring: HashSet<Point> = (0..radius * 6).map(|i| hex_circle_point(radius, i)).collect();
            assert_eq!(ring.len() as i32, radius * 6);
            assert_eq!(hex_circumference(radius), radius * 6);
            for p in ring {
                assert_eq!(hex_dist(Vec2::zero(), p), radius, "{:?} 不在半徑 {} 上", p, radius);
            }
        }
    }

    #[test]
    fn test_ring_winding() {
        // 從 (-r, -r) 開始順時針
        assert_eq!(hex_circle_point(2, 0), pt(-2, -2));
        assert_eq!(hex_circle_point(2, 1), pt(-1, -2));
        assert_eq!(hex_circle_point(2, 2), pt(0, -2));
        assert_eq!(hex_circle_point(2, 4), pt(2, 0));
        assert_eq!(hex_circle_point(2, 6), pt(2, 2));
        // 相鄰索引必為相鄰格，並在一圈後回到起點
        for i in 0..18 {
            assert_eq!(hex_dist(hex_circle_point(3, i), hex_circle_point(3, i + 1)), 1);
        }
        assert_eq!(hex_circle_point(3, 18), hex_circle_point(3, 0));
        assert_eq!(hex_circle_point(3, -1), hex_circle_point(3, 17));
    }

    #[test]
    fn test_wall_type_table() {
        assert_eq!(hex_wall_type(0), WallJunction::Pillar);
        assert_eq!(hex_wall_type(0b111111), WallJunction::Pillar);
        // 直線牆
        assert_eq!(hex_wall_type(0b001001), WallJunction::DiagonalWall);
        assert_eq!(hex_wall_type(0b100100), WallJunction::AxisWallA);
        assert_eq!(hex_wall_type(0b010010), WallJunction::AxisWallB);
        // 牆端
        assert_eq!(hex_wall_type(0b000100), WallJunction::AxisWallA);
        assert_eq!(hex_wall_type(0b000010), WallJunction::AxisWallB);
        assert_eq!(hex_wall_type(0b001000), WallJunction::DiagonalWall);
        // 轉角
        assert_eq!(hex_wall_type(0b000110), WallJunction::Pillar);
        // T 字接合取主幹，十字交叉則是柱子
        assert_eq!(hex_wall_type(0b100101), WallJunction::AxisWallA);
        assert_eq!(hex_wall_type(0b011001), WallJunction::DiagonalWall);
        assert_eq!(hex_wall_type(0b101101), WallJunction::Pillar);
        // 高位元被忽略
        assert_eq!(hex_wall_type(0b1100_1001), WallJunction::DiagonalWall);
        assert_eq!(WallJunction::DiagonalWall.tile_offset(), 3);
    }

    #[test]
    fn test_neighbor_mask() {
        let walls = [pt(-1, -1), pt(1, 1)];
        let mask = hex_neighbor_mask(Vec2::zero(), |p| walls.contains(&p));
        assert_eq!(mask, 0b001001);
        assert_eq!(hex_wall_type(mask), WallJunction::DiagonalWall);
    }
}
