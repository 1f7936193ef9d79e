pub mod demo;

pub use crate::domain::animal::Animal;
pub use crate::domain::bulldog::Bulldog;
pub use crate::domain::dog::Dog;
pub use crate::domain::mammal::Mammal;
pub use crate::domain::ports::{Canine, Creature, WarmBlooded};
pub use crate::utils::error::Result;
