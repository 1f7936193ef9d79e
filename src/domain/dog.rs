use crate::domain::animal::Animal;
use crate::domain::mammal::Mammal;
use crate::domain::ports::{Canine, Creature, WarmBlooded};
use crate::utils::error::Result;

/// A [`Mammal`] with a breed. The warm-blooded flag is always the default.
///
/// The breed formatting helper stays private to this module:
///
/// ```compile_fail
/// let rex = bestiary::Dog::new("Рекс", "Овчарка");
/// let line = rex.breed_info();
/// ```
///
/// So do the fields; the breed is read through [`Dog::breed`]:
///
/// ```compile_fail
/// let rex = bestiary::Dog::new("Рекс", "Овчарка");
/// let breed: String = rex.breed;
/// ```
///
/// ```compile_fail
/// let rex = bestiary::Dog::new("Рекс", "Овчарка");
/// let parent = rex.mammal;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    mammal: Mammal,
    breed: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            mammal: Mammal::new(name),
            breed: breed.into(),
        }
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    fn breed_info(&self) -> String {
        format!("Порода: {}", self.breed)
    }

    /// `"<name>, Порода: <breed>, <warm-blooded status>"`
    pub fn dog_info(&self) -> String {
        format!(
            "{}, {}, {}",
            self.name(),
            self.breed_info(),
            self.mammal.warm_blooded_status()
        )
    }

    pub fn dog_fact() -> &'static str {
        "Собаки — лучшие друзья человека"
    }
}

impl Creature for Dog {
    fn as_animal(&self) -> &Animal {
        self.mammal.as_animal()
    }

    fn kind(&self) -> &'static str {
        "Dog"
    }

    fn make_sound(&self) -> Result<String> {
        Ok(format!("{} говорит: Гав-гав!", self.name()))
    }
}

impl WarmBlooded for Dog {
    fn as_mammal(&self) -> &Mammal {
        &self.mammal
    }
}

impl Canine for Dog {
    fn as_dog(&self) -> &Dog {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bark_replaces_mammal_sound() {
        let rex = Dog::new("Рекс", "Овчарка");
        let sound = rex.make_sound().unwrap();
        assert_eq!(sound, "Рекс говорит: Гав-гав!");
        assert!(!sound.contains("млекопитающее"));
    }

    #[test]
    fn test_dog_info_orders_name_breed_status() {
        let rex = Dog::new("Rex", "Shepherd");
        let info = rex.dog_info();
        assert_eq!(info, "Rex, Порода: Shepherd, теплокровное");

        let name_at = info.find("Rex").unwrap();
        let breed_at = info.find("Shepherd").unwrap();
        let status_at = info.find("теплокровное").unwrap();
        assert!(name_at < breed_at && breed_at < status_at);
    }

    #[test]
    fn test_inherited_accessors() {
        let rex = Dog::new("Рекс", "Овчарка");
        assert_eq!(rex.name(), "Рекс");
        assert_eq!(rex.breed(), "Овчарка");
        assert_eq!(rex.warm_blooded_status(), "теплокровное");
    }
}
