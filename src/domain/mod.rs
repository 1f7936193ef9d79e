// Domain layer: the Animal -> Mammal -> Dog -> Bulldog chain and the traits that tie it together.
// Each type lives in its own module so private fields stay private to the declaring type.

pub mod animal;
pub mod bulldog;
pub mod dog;
pub mod mammal;
pub mod ports;
