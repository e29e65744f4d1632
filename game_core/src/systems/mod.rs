pub mod collision;
pub mod movement;
pub mod pipes;
pub mod scoring;

pub use collision::*;
pub use movement::*;
pub use pipes::*;
pub use scoring::*;
