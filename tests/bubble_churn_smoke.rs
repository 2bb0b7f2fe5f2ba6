use gravibox_engine::World;

const FRAME_MS: f32 = 1000.0 / 60.0;

fn bubble_json(x_percent: u32) -> String {
    format!(
        "{{\"x\":\"{x_percent}%\",\"y\":\"10%\",\"shape\":\"circle\",\"radius\":14,\
         \"material\":{{\"restitution\":0.4}}}}"
    )
}

#[test]
fn twelve_body_churn_leaves_an_empty_table() {
    let mut world = World::new(0.0, 1.0);
    world.resize(480.0, 320.0);

    // Twelve rapid registrations, one bubble per failed gate attempt.
    let mut ids = Vec::new();
    for i in 0..12u32 {
        let id = world.register_body(bubble_json(10 + i * 7));
        assert_ne!(id, 0, "spawn request {i} should parse");
        assert!(!ids.contains(&id), "ids must be distinct");
        ids.push(id);
    }

    for _ in 0..5 {
        world.step(FRAME_MS);
    }
    assert_eq!(world.live_body_count(), 12);
    assert_eq!(world.sync_count(), 12);
    assert_eq!(world.sync_transforms_len(), 12 * 3);
    for id in &ids {
        assert!(world.body_ready(*id));
    }

    // The bundled layout must agree with the individual accessors.
    let layout = world.sync_layout();
    assert_eq!(layout.ids_ptr(), world.sync_ids_ptr() as u32);
    assert_eq!(layout.ids_len_elements(), world.sync_ids_len() as u32);
    assert_eq!(layout.transforms_ptr(), world.sync_transforms_ptr() as u32);
    assert_eq!(
        layout.transforms_len_elements(),
        world.sync_transforms_len() as u32
    );

    for id in &ids {
        world.unregister_body(*id);
    }
    world.step(FRAME_MS);

    // Empty table, zero-write sync frame.
    assert_eq!(world.live_body_count(), 0);
    assert_eq!(world.pending_body_count(), 0);
    assert_eq!(world.sync_count(), 0);
    assert_eq!(world.sync_ids_len(), 0);
    assert_eq!(world.sync_transforms_len(), 0);
}

#[test]
fn spawned_bubble_falls_and_stays_inside_the_container() {
    let mut world = World::new(0.0, 1.0);
    world.resize(400.0, 300.0);

    let id = world.register_body(bubble_json(50));
    for _ in 0..240 {
        world.step(FRAME_MS);
    }

    let (x, y, _) = world
        .core()
        .body_transform(id)
        .expect("body should still be live");
    assert!(y > 30.0, "bubble should have fallen, y = {y}");
    assert!((-14.0..=414.0).contains(&x), "x escaped the walls: {x}");
    assert!(y <= 300.0, "y escaped the floor: {y}");
}
