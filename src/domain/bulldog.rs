use crate::domain::animal::Animal;
use crate::domain::dog::Dog;
use crate::domain::mammal::Mammal;
use crate::domain::ports::{Canine, Creature, WarmBlooded};
use crate::utils::error::Result;

/// A [`Dog`] whose breed is always [`Bulldog::BREED`].
///
/// The disposition helper is private; only [`Bulldog::is_lazy`] reads it:
///
/// ```compile_fail
/// let bruno = bestiary::Bulldog::new("Бруно");
/// let lazy = bruno.sleeps_a_lot();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bulldog {
    dog: Dog,
}

impl Bulldog {
    pub const BREED: &'static str = "Бульдог";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            dog: Dog::new(name, Self::BREED),
        }
    }

    fn sleeps_a_lot(&self) -> bool {
        true
    }

    pub fn is_lazy(&self) -> &'static str {
        if self.sleeps_a_lot() {
            "Ленивый бульдог"
        } else {
            "Активный бульдог"
        }
    }

    pub fn bulldog_fact() -> &'static str {
        "Бульдоги известны своим упрямством и спокойствием"
    }
}

impl Creature for Bulldog {
    fn as_animal(&self) -> &Animal {
        self.dog.as_animal()
    }

    fn kind(&self) -> &'static str {
        "Bulldog"
    }

    fn make_sound(&self) -> Result<String> {
        Ok(format!("{} громко храпит: Хррр-гав!", self.name()))
    }
}

impl WarmBlooded for Bulldog {
    fn as_mammal(&self) -> &Mammal {
        self.dog.as_mammal()
    }
}

impl Canine for Bulldog {
    fn as_dog(&self) -> &Dog {
        &self.dog
    }
}
