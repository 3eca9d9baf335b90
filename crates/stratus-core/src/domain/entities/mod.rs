pub mod parameter;
pub mod resource;
pub mod stack;
pub mod template;
pub mod value;

pub use crate::domain::DomainError;
pub use parameter::{Parameter, ParameterBuilder};
pub use resource::{Resource, ResourceBuilder};
pub use stack::{StackDefinition, StackInfo};
pub use template::Template;
pub use value::{Intrinsic, Reference, Value};
