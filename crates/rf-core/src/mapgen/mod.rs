//! Procedural realm generation: terrain passes, path/lake carving
//! primitives, building rendering and BSP partitioning.

pub mod bsp;
pub mod building;
pub mod path;
pub mod terrain;

pub use bsp::{BspNode, GenSession};
pub use building::{Building, draw_border, render_building};
pub use path::{carve_path, fill_lake};
pub use terrain::{big_river, dig_lakes, mountain_ranges, scatter_forest};
