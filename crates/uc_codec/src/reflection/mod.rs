// -----------------------------------------------------------------------------
// Modules

mod reflect;

// -----------------------------------------------------------------------------
// Exports

pub use reflect::{Reflect, ReflectRef};
