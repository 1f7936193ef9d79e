use crate::config::toml_config::RosterConfig;
use crate::core::{Animal, Bulldog, Canine, Creature, Dog, Mammal};
use crate::utils::error::Result;
use serde::Serialize;

/// Everything the demonstration prints, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub sounds: Vec<String>,
    pub facts: Vec<String>,
    pub info: String,
    pub laziness: String,
}

impl DemoReport {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.sounds.len() + self.facts.len() + 2);
        lines.extend(self.sounds.iter().cloned());
        lines.extend(self.facts.iter().cloned());
        lines.push(self.info.clone());
        lines.push(self.laziness.clone());
        lines
    }

    pub fn to_text(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Type-level facts from the root of the chain down to the bulldog.
pub fn species_facts() -> [&'static str; 4] {
    [
        Animal::info(),
        Mammal::mammal_fact(),
        Dog::dog_fact(),
        Bulldog::bulldog_fact(),
    ]
}

pub struct Demo {
    abstract_animal: Animal,
    chorus: Vec<Box<dyn Creature>>,
    featured: Bulldog,
}

impl Demo {
    pub fn from_roster(roster: &RosterConfig) -> Self {
        let chorus: Vec<Box<dyn Creature>> = vec![
            Box::new(Mammal::new(roster.mammal.as_str())),
            Box::new(Dog::new(roster.dog.name.as_str(), roster.dog.breed.as_str())),
            Box::new(Bulldog::new(roster.bulldog.as_str())),
        ];

        Self {
            abstract_animal: Animal::new(roster.abstract_animal.as_str()),
            chorus,
            featured: Bulldog::new(roster.featured_bulldog.as_str()),
        }
    }

    /// Instances that take part in the sound round, in construction order.
    /// The bare [`Animal`] is never part of it.
    pub fn chorus(&self) -> impl Iterator<Item = &dyn Creature> {
        self.chorus.iter().map(|creature| creature.as_ref())
    }

    /// Bulldog whose info and laziness lines close the report.
    pub fn featured(&self) -> &Bulldog {
        &self.featured
    }

    /// Calls `make_sound` on the bare animal. Always an error; the run never does this.
    pub fn probe_abstract(&self) -> Result<String> {
        self.abstract_animal.make_sound()
    }

    pub fn run(&self) -> Result<DemoReport> {
        let mut sounds = Vec::with_capacity(self.chorus.len());
        for creature in self.chorus() {
            let sound = creature.make_sound()?;
            tracing::debug!(kind = creature.kind(), name = creature.name(), "{}", sound);
            sounds.push(sound);
        }

        let report = DemoReport {
            sounds,
            facts: species_facts().iter().map(|fact| fact.to_string()).collect(),
            info: self.featured.dog_info(),
            laziness: self.featured.is_lazy().to_string(),
        };
        tracing::info!(lines = report.lines().len(), "Demo finished");
        Ok(report)
    }
}

impl Default for Demo {
    fn default() -> Self {
        Self::from_roster(&RosterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BestiaryError;

    #[test]
    fn test_default_run_matches_script_output() {
        let report = Demo::default().run().unwrap();
        assert_eq!(
            report.lines(),
            vec![
                "Кенгуру издаёт звук (млекопитающее)",
                "Рекс говорит: Гав-гав!",
                "Бруно громко храпит: Хррр-гав!",
                "Это базовый класс для всех животных",
                "Все млекопитающие вскармливают детёнышей молоком",
                "Собаки — лучшие друзья человека",
                "Бульдоги известны своим упрямством и спокойствием",
                "Чарли, Порода: Бульдог, теплокровное",
                "Ленивый бульдог",
            ]
        );
    }

    #[test]
    fn test_chorus_excludes_bare_animal() {
        let demo = Demo::default();
        let kinds: Vec<&str> = demo.chorus().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec!["Mammal", "Dog", "Bulldog"]);
    }

    #[test]
    fn test_probe_abstract_fails() {
        let err = Demo::default().probe_abstract().unwrap_err();
        assert!(matches!(err, BestiaryError::UnimplementedCapability { .. }));
    }

    #[test]
    fn test_to_text_ends_with_newline() {
        let text = Demo::default().run().unwrap().to_text();
        assert!(text.ends_with("Ленивый бульдог\n"));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn test_to_json_fields() {
        let json = Demo::default().run().unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sounds"].as_array().unwrap().len(), 3);
        assert_eq!(value["facts"].as_array().unwrap().len(), 4);
        assert_eq!(value["laziness"], "Ленивый бульдог");
    }
}
