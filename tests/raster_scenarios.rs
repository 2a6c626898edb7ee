//! End-to-end scenarios through the public API.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rasterkit::{
    draw_line_antialiased, draw_line_exact, fill_region_color, fill_region_pattern,
    fill_triangle, fill_triangle_with_rule, trace_boundary, AnchorPolicy, FillRule,
    GouraudVertex, Outcome, Pattern, PatternMode, PixelSurface, Point, PointF, Rgb8, RgbBuffer,
    RgbView, Session, Tool,
};

fn ring_canvas() -> RgbBuffer {
    let mut buf = RgbBuffer::filled(10, 10, Rgb8::WHITE).unwrap();
    for i in 2..=6 {
        buf.copy_pixel(i, 2, Rgb8::BLACK);
        buf.copy_pixel(i, 6, Rgb8::BLACK);
        buf.copy_pixel(2, i, Rgb8::BLACK);
        buf.copy_pixel(6, i, Rgb8::BLACK);
    }
    buf
}

#[test]
fn test_ring_fill_then_trace() {
    let mut buf = ring_canvas();
    let painted = fill_region_color(&mut buf, Point::new(4, 4), Rgb8::RED);
    assert_eq!(painted, 9);
    for y in 0..10 {
        for x in 0..10 {
            let inside = (3..=5).contains(&x) && (3..=5).contains(&y);
            let on_ring = (2..=6).contains(&x)
                && (2..=6).contains(&y)
                && (x == 2 || x == 6 || y == 2 || y == 6);
            let want = if inside {
                Rgb8::RED
            } else if on_ring {
                Rgb8::BLACK
            } else {
                Rgb8::WHITE
            };
            assert_eq!(buf.pixel(x, y), want, "({}, {})", x, y);
        }
    }

    // The recolored interior does not change which border encloses it.
    let set = trace_boundary(&buf, Point::new(4, 4), Rgb8::BLACK);
    assert_eq!(set.len(), 12);
}

#[test]
fn test_idempotent_fill_on_random_canvas() {
    let mut rng = StdRng::seed_from_u64(7);
    let palette = [Rgb8::WHITE, Rgb8::BLACK, Rgb8::RED];
    let mut buf = RgbBuffer::from_fn(32, 24, |_, _| palette[rng.gen_range(0..3)]).unwrap();
    let before = buf.clone();
    for _ in 0..50 {
        let seed = Point::new(rng.gen_range(0..32), rng.gen_range(0..24));
        let same = buf.pixel(seed.x, seed.y);
        assert_eq!(fill_region_color(&mut buf, seed, same), 0);
    }
    assert_eq!(buf, before);
}

#[test]
fn test_fill_touches_only_the_seed_component() {
    let mut rng = StdRng::seed_from_u64(0xf111);
    for _ in 0..20 {
        let mut buf = RgbBuffer::from_fn(24, 24, |_, _| {
            if rng.gen_bool(0.35) {
                Rgb8::BLACK
            } else {
                Rgb8::WHITE
            }
        })
        .unwrap();
        let seed = Point::new(rng.gen_range(0..24), rng.gen_range(0..24));
        let target = buf.pixel(seed.x, seed.y);
        let before = buf.clone();
        let painted = fill_region_color(&mut buf, seed, Rgb8::BLUE);

        // Every changed pixel was target-colored and is now blue.
        let mut changed = 0;
        for y in 0..24 {
            for x in 0..24 {
                if buf.pixel(x, y) != before.pixel(x, y) {
                    assert_eq!(before.pixel(x, y), target);
                    assert_eq!(buf.pixel(x, y), Rgb8::BLUE);
                    changed += 1;
                }
            }
        }
        assert_eq!(changed, painted);

        // The region is maximal: no target pixel is left next to it.
        for y in 0..24 {
            for x in 0..24 {
                if buf.pixel(x, y) != Rgb8::BLUE {
                    continue;
                }
                for n in Point::new(x, y).neighbors4() {
                    assert_ne!(buf.get_at(n), Some(target), "{:?}", n);
                }
            }
        }
    }
}

#[test]
fn test_tiled_pattern_fill_with_click_anchor() {
    let mut buf = ring_canvas();
    let pattern =
        Pattern::from_fn(2, 2, |x, y| Rgb8::new(x as u8 * 100, y as u8 * 100, 7)).unwrap();
    let click = Point::new(5, 5);
    let anchor = AnchorPolicy::Click.resolve(click, &pattern);
    let painted = fill_region_pattern(&mut buf, click, &pattern, anchor, PatternMode::Tile);
    assert_eq!(painted, 9);
    for y in 3..=5 {
        for x in 3..=5 {
            let px = (x - 5i32).rem_euclid(2);
            let py = (y - 5i32).rem_euclid(2);
            assert_eq!(buf.pixel(x, y), pattern.color_at(px, py).unwrap());
        }
    }
}

#[test]
fn test_lines_on_caller_buffer() {
    // 5 pixels wide with one padding byte per row.
    let mut bytes = vec![255u8; 16 * 4];
    {
        let mut view = RgbView::new(&mut bytes, 5, 4, 16).unwrap();
        assert_eq!(
            draw_line_exact(&mut view, Point::new(0, 0), Point::new(4, 3), Rgb8::BLACK),
            5
        );
        draw_line_antialiased(&mut view, Point::new(0, 3), Point::new(4, 3), Rgb8::BLACK);
        assert_eq!(view.pixel(0, 0), Rgb8::BLACK);
        assert_eq!(view.pixel(4, 3), Rgb8::BLACK);
    }
    // Padding bytes are never touched.
    for row in 0..4 {
        assert_eq!(bytes[row * 16 + 15], 255);
    }
}

#[test]
fn test_triangle_mesh_top_left_covers_once() {
    // A 12x12 grid of points split into triangles; every interior pixel of
    // the covered square is painted exactly once.
    let mut buf = RgbBuffer::filled(13, 13, Rgb8::WHITE).unwrap();
    let mut total = 0;
    for gy in 0..3 {
        for gx in 0..3 {
            let x0 = gx as f64 * 4.0;
            let y0 = gy as f64 * 4.0;
            let v = |x: f64, y: f64| GouraudVertex::new((x, y), Rgb8::BLACK);
            total += fill_triangle_with_rule(
                &mut buf,
                [v(x0, y0), v(x0 + 4.0, y0), v(x0 + 4.0, y0 + 4.0)],
                FillRule::TopLeft,
            );
            total += fill_triangle_with_rule(
                &mut buf,
                [v(x0, y0), v(x0 + 4.0, y0 + 4.0), v(x0, y0 + 4.0)],
                FillRule::TopLeft,
            );
        }
    }
    assert_eq!(total, 12 * 12);
    for y in 0..12 {
        for x in 0..12 {
            assert_eq!(buf.pixel(x, y), Rgb8::BLACK);
        }
    }
    assert_eq!(buf.pixel(12, 12), Rgb8::WHITE);
}

#[test]
fn test_triangle_vertices_keep_their_colors() {
    let mut rng = StdRng::seed_from_u64(0x7a1);
    for _ in 0..100 {
        let mut buf = RgbBuffer::filled(64, 64, Rgb8::WHITE).unwrap();
        let pts: Vec<Point> = (0..3)
            .map(|_| Point::new(rng.gen_range(0..64), rng.gen_range(0..64)))
            .collect();
        let n = fill_triangle(
            &mut buf,
            pts[0].into(),
            pts[1].into(),
            pts[2].into(),
            Rgb8::RED,
            Rgb8::GREEN,
            Rgb8::BLUE,
        );
        let cross = (pts[1].x - pts[0].x) * (pts[2].y - pts[0].y)
            - (pts[1].y - pts[0].y) * (pts[2].x - pts[0].x);
        if cross == 0 {
            assert_eq!(n, 0);
            continue;
        }
        assert!(n > 0);
        assert_eq!(buf.pixel(pts[0].x, pts[0].y), Rgb8::RED);
        assert_eq!(buf.pixel(pts[1].x, pts[1].y), Rgb8::GREEN);
        assert_eq!(buf.pixel(pts[2].x, pts[2].y), Rgb8::BLUE);
    }
}

#[test]
fn test_subpixel_triangle_outside_is_noop() {
    let mut buf = RgbBuffer::filled(8, 8, Rgb8::WHITE).unwrap();
    let n = fill_triangle(
        &mut buf,
        PointF::new(-5.0, -5.0),
        PointF::new(-1.0, -5.0),
        PointF::new(-3.0, -1.0),
        Rgb8::RED,
        Rgb8::GREEN,
        Rgb8::BLUE,
    );
    assert_eq!(n, 0);
}

#[test]
fn test_paint_session_workflow() {
    let mut canvas = RgbBuffer::filled(60, 40, Rgb8::WHITE).unwrap();
    let mut session = Session::default();

    // Draw a closed outline with the line tool.
    session.set_tool(Tool::Line);
    let corners = [(10, 10), (40, 10), (40, 30), (10, 30), (10, 10)];
    for w in corners.windows(2) {
        session.press(&mut canvas, w[0].into());
        session.press(&mut canvas, w[1].into());
    }

    // Fill the inside.
    session.set_tool(Tool::Fill);
    session.set_color(Rgb8::GREEN);
    let Outcome::Painted { pixels } = session.press(&mut canvas, Point::new(20, 20)) else {
        panic!("fill did not paint");
    };
    assert!(pixels > 0);
    assert_eq!(canvas.pixel(20, 20), Rgb8::GREEN);
    assert_eq!(canvas.pixel(5, 5), Rgb8::WHITE);

    // The anti-aliased copy cuts through the outline, so the green region is
    // enclosed by the copy on its top and left sides.
    session.set_tool(Tool::Boundary);
    session.set_color(Rgb8::BLACK);
    let Outcome::Traced(trace) = session.press(&mut canvas, Point::new(20, 20)) else {
        panic!("boundary tool did not trace");
    };
    assert!(!trace.is_empty());
    assert_eq!(canvas.pixel(25, 15), Rgb8::RED);
    assert_eq!(canvas.pixel(40, 20), Rgb8::RED);
    assert_eq!(canvas.pixel(25, 10), Rgb8::BLACK);
}
