//! Model gateway protocol definitions.
//!
//! Gateways connect to model APIs (Anthropic, OpenAI) and normalize
//! their responses into one shape the orchestration loop understands.

mod traits;
mod request;
mod response;

pub use traits::*;
pub use request::*;
pub use response::*;
