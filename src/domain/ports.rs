use crate::domain::animal::Animal;
use crate::domain::dog::Dog;
use crate::domain::mammal::Mammal;
use crate::utils::error::{BestiaryError, Result};

/// Capability set shared by every type in the chain.
///
/// Implementors only have to say which [`Animal`] they wrap and what they are
/// called; `make_sound` fails until a more specific type overrides it.
pub trait Creature {
    fn as_animal(&self) -> &Animal;

    fn kind(&self) -> &'static str;

    fn name(&self) -> &str {
        self.as_animal().name()
    }

    fn make_sound(&self) -> Result<String> {
        Err(BestiaryError::UnimplementedCapability {
            kind: self.kind(),
            capability: "make_sound",
        })
    }
}

/// Everything from [`Mammal`] down.
pub trait WarmBlooded: Creature {
    fn as_mammal(&self) -> &Mammal;

    fn warm_blooded_status(&self) -> &'static str {
        self.as_mammal().warm_blooded_status()
    }
}

/// Everything from [`Dog`] down.
pub trait Canine: WarmBlooded {
    fn as_dog(&self) -> &Dog;

    fn breed(&self) -> &str {
        self.as_dog().breed()
    }

    fn dog_info(&self) -> String {
        self.as_dog().dog_info()
    }
}
