//! Desktop session integration tests
//!
//! Drives a full session through the public API the way a host shell
//! would: sync the task list, measure the surface, route pointer input,
//! and feed minimize/close intents back into the task list.

use lumen_desktop::{
    DesktopEngine, DesktopEvent, InputResult, InputRouter, Size, Task, Vec2,
};

/// Flip the named task inactive, the way a host minimize handler would.
fn deactivate(tasks: &mut [Task], id: u32) {
    for task in tasks.iter_mut() {
        if task.id == id {
            task.is_window_active = false;
        }
    }
}

#[test]
fn test_full_session() {
    let mut engine = DesktopEngine::new();
    let mut router = InputRouter::new();
    let mut tasks = vec![
        Task::new(1, "Files"),
        Task::new(2, "Terminal"),
        Task::new(3, "About").with_resizable(false),
    ];

    // First render happens before layout; the surface is measured once
    // afterwards.
    engine.sync_tasks(&tasks).unwrap();
    engine.measure_viewport(1600.0, 900.0);
    assert_eq!(engine.windows.len(), 3);

    // Initial stacking follows task order.
    assert_eq!(engine.windows.top_window().unwrap().id, 3);

    // Clicking into window 1 raises it above both siblings.
    engine.focus(1).unwrap();
    let z1 = engine.windows.get(1).unwrap().z_index;
    assert!(engine.windows.windows().all(|w| w.id == 1 || w.z_index < z1));

    // Arrange window 1, then maximize and restore it: geometry survives.
    engine.drag_to(1, Vec2::new(120.0, 40.0)).unwrap();
    engine.resize_to(1, Size::new(500.0, 320.0)).unwrap();
    engine.toggle_maximize(1).unwrap();
    assert_eq!(engine.windows.get(1).unwrap().size, Size::new(1600.0, 900.0));
    engine.toggle_maximize(1).unwrap();
    assert_eq!(engine.windows.get(1).unwrap().size, Size::new(500.0, 320.0));

    // Minimize window 2 through the intent path; the host hides the task
    // and the window dies on the next sync, geometry discarded.
    let event = engine.minimize(2).unwrap();
    assert_eq!(event, DesktopEvent::Minimize(2));
    deactivate(&mut tasks, 2);
    engine.sync_tasks(&tasks).unwrap();
    assert!(!engine.windows.contains(2));

    // Window 1 keeps its stacking through the sync.
    assert_eq!(engine.windows.top_window().unwrap().id, 1);

    // Reopening task 2 produces a fresh window at defaults, on top.
    tasks[1].is_window_active = true;
    engine.sync_tasks(&tasks).unwrap();
    let reopened = engine.windows.get(2).unwrap();
    assert_eq!(reopened.size, Size::new(400.0, 500.0));
    assert_eq!(engine.windows.top_window().unwrap().id, 2);

    // Drag the reopened window by its title bar via the router.
    let grab = reopened.position + Vec2::new(30.0, 10.0);
    let result = router.pointer_down(&mut engine, grab).unwrap();
    assert_eq!(result, InputResult::DragStarted(2));
    router
        .pointer_move(&mut engine, grab + Vec2::new(200.0, -500.0))
        .unwrap();
    router.pointer_up();
    let dragged = engine.windows.get(2).unwrap();
    assert_eq!(dragged.position.y, 0.0);

    // Close window 3 and remove the task entirely.
    let event = engine.close(3).unwrap();
    assert_eq!(event, DesktopEvent::Close(3));
    tasks.retain(|t| t.id != 3);
    engine.sync_tasks(&tasks).unwrap();
    assert_eq!(engine.windows.len(), 2);
}

#[test]
fn test_snapshot_serializes_for_host_bridge() {
    let mut engine = DesktopEngine::new();
    engine.measure_viewport(1280.0, 720.0);
    engine.sync_tasks(&[Task::new(1, "Files")]).unwrap();
    engine.toggle_maximize(1).unwrap();

    let windows: Vec<_> = engine.windows.windows().collect();
    let json = serde_json::to_string(&windows).unwrap();
    assert!(json.contains("\"maximized\""));
    assert!(json.contains("\"Files\""));
}
