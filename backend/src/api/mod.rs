pub mod catchers;
pub mod summary;
pub mod video;

pub use catchers::*;
pub use summary::*;
pub use video::*;
