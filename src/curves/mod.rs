//! Curve discretization.

mod arc;
mod bezier;
mod catmull_rom;

pub use arc::CircularArc2;
pub use bezier::Bezier2;
pub use catmull_rom::CatmullRom2;
