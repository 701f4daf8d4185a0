use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_platformer::core::{SpriteBuilder, World};
use tui_platformer::term::{FrameBuffer, Viewport, WorldView};
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
fn world_view_render_is_allocation_free_after_warmup() {
    let view = WorldView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut world = World::default();
    world.add_sprite(SpriteBuilder::new(2, 2).layer(-1).build());
    world.add_sprite(SpriteBuilder::new(4, 2).layer(3).build());
    let right = InputState {
        right: true,
        jump: true,
        ..InputState::NONE
    };

    // Warm-up (initial clears).
    view.render_into(&world, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..100 {
            let _ = world.update(right);
            view.render_into(&world, viewport, &mut fb);
        }

        // Paused frames draw the overlay.
        world.apply_action(PlayerAction::Pause);
        for _ in 0..10 {
            view.render_into(&world, viewport, &mut fb);
        }
    });

    assert!(allocs == 0);
}
