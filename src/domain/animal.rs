use crate::domain::ports::Creature;

/// Root of the chain. Carries the name and nothing else.
///
/// The name can only be read through [`Animal::name`]:
///
/// ```compile_fail
/// let animal = bestiary::Animal::new("X");
/// let raw = animal.name;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    name: String,
}

impl Animal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        self.private_name()
    }

    fn private_name(&self) -> &str {
        &self.name
    }

    pub fn info() -> &'static str {
        "Это базовый класс для всех животных"
    }
}

impl Creature for Animal {
    fn as_animal(&self) -> &Animal {
        self
    }

    fn kind(&self) -> &'static str {
        "Animal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BestiaryError;

    #[test]
    fn test_name_is_kept_verbatim() {
        let animal = Animal::new("Абстрактное животное");
        assert_eq!(animal.name(), "Абстрактное животное");
        assert_eq!(Creature::name(&animal), "Абстрактное животное");
    }

    #[test]
    fn test_make_sound_is_unimplemented() {
        let animal = Animal::new("X");
        match animal.make_sound() {
            Err(BestiaryError::UnimplementedCapability { kind, capability }) => {
                assert_eq!(kind, "Animal");
                assert_eq!(capability, "make_sound");
            }
            other => panic!("expected UnimplementedCapability, got {:?}", other),
        }
    }

    #[test]
    fn test_info_needs_no_instance() {
        assert_eq!(Animal::info(), "Это базовый класс для всех животных");
    }
}
