use crate::domain::animal::Animal;
use crate::domain::ports::{Creature, WarmBlooded};
use crate::utils::error::Result;

/// An [`Animal`] that is warm-blooded unless built with [`Mammal::with_warm_blooded`].
///
/// The flag and its raw accessor are private:
///
/// ```compile_fail
/// let kangaroo = bestiary::Mammal::new("Кенгуру");
/// let flag = kangaroo.warm_blooded;
/// ```
///
/// ```compile_fail
/// let kangaroo = bestiary::Mammal::new("Кенгуру");
/// let flag = kangaroo.is_warm_blooded();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mammal {
    animal: Animal,
    warm_blooded: bool,
}

impl Mammal {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_warm_blooded(name, true)
    }

    pub fn with_warm_blooded(name: impl Into<String>, warm_blooded: bool) -> Self {
        Self {
            animal: Animal::new(name),
            warm_blooded,
        }
    }

    fn is_warm_blooded(&self) -> bool {
        self.warm_blooded
    }

    pub fn warm_blooded_status(&self) -> &'static str {
        if self.is_warm_blooded() {
            "теплокровное"
        } else {
            "холоднокровное"
        }
    }

    pub fn mammal_fact() -> &'static str {
        "Все млекопитающие вскармливают детёнышей молоком"
    }
}

impl Creature for Mammal {
    fn as_animal(&self) -> &Animal {
        &self.animal
    }

    fn kind(&self) -> &'static str {
        "Mammal"
    }

    fn make_sound(&self) -> Result<String> {
        Ok(format!("{} издаёт звук (млекопитающее)", self.name()))
    }
}

impl WarmBlooded for Mammal {
    fn as_mammal(&self) -> &Mammal {
        self
    }
}
