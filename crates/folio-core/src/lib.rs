pub mod animate;
pub mod camera;
pub mod constants;
pub mod content;
pub mod mesh;
pub mod pick;
pub mod scene;
pub mod session;
pub mod tween;

pub use animate::*;
pub use camera::*;
pub use constants::*;
pub use content::*;
pub use mesh::*;
pub use pick::*;
pub use scene::*;
pub use session::*;
pub use tween::*;
