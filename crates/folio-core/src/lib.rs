pub mod camera;
pub mod connectivity;
pub mod constants;
pub mod events;
pub mod flash;
pub mod layout;
pub mod motion;
pub mod parallax;
pub mod registry;
pub mod resolver;
pub mod reveal;
pub mod router;
pub mod scene;
pub mod viewport;

pub use camera::*;
pub use connectivity::*;
pub use events::*;
pub use flash::*;
pub use layout::*;
pub use motion::*;
pub use parallax::*;
pub use registry::*;
pub use resolver::*;
pub use reveal::*;
pub use router::*;
pub use scene::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static TILES_WGSL: &str = include_str!("../shaders/tiles.wgsl");
pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");
