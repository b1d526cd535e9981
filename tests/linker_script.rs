//! The blue pill memory map must only reach the linker when the demo is built.

use std::path::Path;

#[cfg(not(feature = "blue-pill"))]
#[test]
fn no_memory_map_without_the_board_demo() {
    let script = Path::new(env!("OUT_DIR")).join("memory.x");
    assert!(!script.exists(), "{} leaks into dependent firmware", script.display());
}

#[cfg(feature = "blue-pill")]
#[test]
fn board_demo_gets_its_memory_map() {
    let script = Path::new(env!("OUT_DIR")).join("memory.x");
    assert!(script.exists());
}
