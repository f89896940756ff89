//! Pure simulation core, free of `web_sys` so it compiles and tests on the
//! host. The web glue in the crate root feeds it platform facts (viewport
//! metrics, timer/frame handles) and executes the effects it asks for.

pub mod config;
pub mod device;
pub mod field;
pub mod lifecycle;
pub mod links;
pub mod surface;
