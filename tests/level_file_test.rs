use std::path::PathBuf;

use tui_platformer::core::{Level, LevelError, World};
use tui_platformer::types::{InputState, TILE_SIZE};

fn temp_level(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "tui-platformer-{}-{name}.txt",
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loaded_level_drives_the_world() {
    let path = temp_level("stairs", "P...\n....\n#...\n.##.\n...#\n");
    let level = Level::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(level.player_start, (0, 0));
    assert_eq!(level.ground, vec![(0, 2), (1, 3), (2, 3), (3, 4)]);

    let mut world = World::new(level);
    assert_eq!(world.ground().len(), 4);
    for _ in 0..30 {
        world.update(InputState::NONE);
    }
    assert!(world.player().standing);
    assert_eq!(world.player().rect().bottom(), 2 * TILE_SIZE);
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("tui-platformer-does-not-exist.txt");
    assert!(matches!(Level::load(&path), Err(LevelError::Io(_))));
}

#[test]
fn bad_tile_reports_its_position() {
    let path = temp_level("bad", "P..\n.x.\n");
    let err = Level::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(
        err,
        LevelError::UnknownTile {
            ch: 'x',
            line: 2,
            column: 2
        }
    ));
    assert_eq!(err.to_string(), "unknown tile 'x' at line 2, column 2");
}
