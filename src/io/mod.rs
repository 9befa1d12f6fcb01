//! Map file loading.

mod map_format;

pub use map_format::{load_map, parse_map, MapDescription, MapError};
