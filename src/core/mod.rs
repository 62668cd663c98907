pub mod backdrop;
pub mod clock;
pub mod config;
pub mod error;
pub mod interaction;
pub mod particles;
pub mod pointer;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod surface;
pub mod timer;

pub use backdrop::*;
pub use clock::*;
pub use config::*;
pub use error::*;
pub use interaction::*;
pub use particles::*;
pub use pointer::*;
pub use reveal::*;
pub use ripple::*;
pub use scroll::*;
pub use surface::*;
pub use timer::*;
