use scroller::{
    Easing, Geometry, GestureSample, InputEvent, InputKind, PointerButton, PointerTarget,
    ScrollEvent, Scroller, ScrollerOptions, Size,
};

fn main() {
    // Simulate a UI adapter: 300x300 viewport over 300x900 content gives
    // 600 px of vertical travel.
    let opts = ScrollerOptions::new(Geometry::new(
        Size::new(300.0, 300.0),
        Size::new(300.0, 900.0),
    ));
    let mut s = Scroller::new(opts);

    s.on(ScrollEvent::ScrollStart, |_| println!("event: scroll start"));
    s.on(ScrollEvent::ScrollEnd, |s| {
        println!("event: scroll end at {:?}", s.position());
    });

    // Drag up 50 px over 100 ms...
    s.handle_event(InputEvent::PointerDown {
        kind: InputKind::Touch,
        button: PointerButton::Primary,
        sample: GestureSample::new(150.0, 200.0, 1_000),
        target: PointerTarget::default(),
    });
    for (y, t) in [(175.0, 1_050), (150.0, 1_100)] {
        s.handle_event(InputEvent::PointerMove {
            kind: InputKind::Touch,
            sample: GestureSample::new(150.0, y, t),
        });
        println!("dragging: position={:?}", s.position());
    }
    // ...and release: momentum takes over.
    s.handle_event(InputEvent::PointerUp {
        kind: InputKind::Touch,
        sample: GestureSample::new(150.0, 150.0, 1_100),
        target: PointerTarget::default(),
    });

    // Frame loop at ~60 fps until the momentum scroll settles.
    let mut now = 1_100;
    while s.is_animating() {
        now += 16;
        if let Some((x, y)) = s.tick(now) {
            if now % 160 < 16 {
                println!("frame {now}: ({x:.1}, {y:.1})");
            }
        }
    }

    // Programmatic scroll back to the top on a bounce curve.
    s.scroll_to(0.0, 0.0, now, 400.0, Some(Easing::Bounce));
    while s.is_animating() {
        now += 16;
        s.tick(now);
    }
    println!("settled at {:?}", s.position());
}
