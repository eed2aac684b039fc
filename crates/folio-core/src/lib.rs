//! Platform-free core for the portfolio scene: particle field physics,
//! section navigation, and the static content both present to the host.

pub mod constants;
pub mod content;
pub mod draw;
pub mod nav;
pub mod particles;

pub use draw::*;
pub use nav::*;
pub use particles::*;
