use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crossterm::event::{KeyCode, KeyEvent};

use tui_platformer::core::World;
use tui_platformer::input::InputHandler;
use tui_platformer::types::{InputState, PlayerAction};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn world_and_input_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut world = World::default();
    let mut input = InputHandler::new().with_release_events(true);

    // Warm-up.
    let _ = world.update(InputState::NONE);

    let allocs = with_alloc_counting(|| {
        // Falling and landing.
        for _ in 0..100 {
            let _ = world.update(InputState::NONE);
        }

        // Walking and jumping through the key handler.
        for i in 0..200u32 {
            match i % 40 {
                0 => {
                    let _ = input.handle_key_press(KeyEvent::from(KeyCode::Right));
                }
                10 => {
                    let _ = input.handle_key_press(KeyEvent::from(KeyCode::Char(' ')));
                }
                12 => input.handle_key_release(KeyEvent::from(KeyCode::Char(' '))),
                20 => input.handle_key_release(KeyEvent::from(KeyCode::Right)),
                25 => {
                    let _ = input.handle_key_press(KeyEvent::from(KeyCode::Left));
                }
                35 => input.handle_key_release(KeyEvent::from(KeyCode::Left)),
                _ => input.handle_key_repeat(KeyEvent::from(KeyCode::Left)),
            }
            for action in input.take_actions() {
                world.apply_action(action);
            }
            let held = input.update(33);
            let _ = world.update(held);
        }

        // Pause toggles are one-shot actions.
        for _ in 0..10 {
            let _ = input.handle_key_press(KeyEvent::from(KeyCode::Char('p')));
            for action in input.take_actions() {
                world.apply_action(action);
            }
            let _ = world.update(InputState::NONE);
        }
        world.apply_action(PlayerAction::Pause);
        let _ = world.snapshot();
    });

    assert!(allocs == 0);
}
