//! Tool protocol definitions.
//!
//! Tools are schema-described callables a model can invoke through a
//! backend.

mod descriptor;
mod outcome;
mod backend;
mod abort;

pub use descriptor::*;
pub use outcome::*;
pub use backend::*;
pub use abort::*;
