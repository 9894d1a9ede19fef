use crate::coords::Vec2;

use super::quad::Segment;

/// Screen thickness for a stroke that is `world_width` wide at zoom `scale`.
///
/// Truncated to whole pixels and never thinner than one pixel, so strokes stay
/// visible when fully zoomed out.
pub fn scaled_thickness(scale: f32, world_width: f32) -> f32 {
    (scale * world_width).floor().max(1.0)
}

/// The four edges of the world frame, projected through `project`.
///
/// The frame sits `thickness` outside the world rectangle on every side and runs
/// UL→UR→BR→BL→UL, so consecutive edges share endpoints.
pub fn border_segments(
    world_size: Vec2,
    thickness: f32,
    project: impl Fn(Vec2) -> Vec2,
) -> [Segment; 4] {
    let t = thickness;
    let ul = project(Vec2::new(-t, -t));
    let ur = project(Vec2::new(world_size.x + t, -t));
    let br = project(Vec2::new(world_size.x + t, world_size.y + t));
    let bl = project(Vec2::new(-t, world_size.y + t));

    [
        Segment::new(ul, ur),
        Segment::new(ur, br),
        Segment::new(br, bl),
        Segment::new(bl, ul),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thickness_floors_and_has_a_one_pixel_minimum() {
        assert_eq!(scaled_thickness(0.39, 2.0), 1.0);
        assert_eq!(scaled_thickness(1.0, 10.0), 10.0);
        assert_eq!(scaled_thickness(2.75, 2.0), 5.0);
    }

    #[test]
    fn border_edges_are_closed_loop() {
        let edges = border_segments(Vec2::new(100.0, 50.0), 2.0, |p| p);
        for i in 0..4 {
            assert_eq!(edges[i].end, edges[(i + 1) % 4].start);
        }
        assert_eq!(edges[0].start, Vec2::new(-2.0, -2.0));
        assert_eq!(edges[1].end, Vec2::new(102.0, 52.0));
    }

    #[test]
    fn border_is_projected() {
        let edges = border_segments(Vec2::new(10.0, 10.0), 1.0, |p| p * 2.0 - Vec2::new(5.0, 5.0));
        assert_eq!(edges[0].start, Vec2::new(-7.0, -7.0));
        assert_eq!(edges[0].end, Vec2::new(17.0, -7.0));
    }
}
