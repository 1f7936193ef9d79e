use bestiary::utils::validation::Validate;
use bestiary::{BestiaryError, Creature, Demo, RosterConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_custom_roster_end_to_end() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
mammal = "Kangaroo"
bulldog = "Bruno"
featured_bulldog = "Charlie"

[dog]
name = "Rex"
breed = "Shepherd"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let roster = RosterConfig::from_file(temp_file.path()).unwrap();
    roster.validate().unwrap();

    let report = Demo::from_roster(&roster).run().unwrap();

    assert_eq!(
        report.sounds,
        vec![
            "Kangaroo издаёт звук (млекопитающее)",
            "Rex говорит: Гав-гав!",
            "Bruno громко храпит: Хррр-гав!",
        ]
    );
    assert_eq!(report.info, "Charlie, Порода: Бульдог, теплокровное");
    assert_eq!(report.laziness, "Ленивый бульдог");
}

#[test]
fn test_report_line_order() {
    let lines = Demo::default().run().unwrap().lines();
    assert_eq!(lines.len(), 9);
    assert!(lines[0].contains("млекопитающее"));
    assert!(lines[1].contains("Гав-гав"));
    assert!(lines[2].contains("храпит"));
    assert_eq!(&lines[3..7], &bestiary::species_facts().map(String::from)[..]);
    assert!(lines[7].starts_with("Чарли"));
    assert_eq!(lines[8], "Ленивый бульдог");
}

#[test]
fn test_featured_bulldog_is_separate_from_chorus() {
    let demo = Demo::default();
    let chorus_names: Vec<&str> = demo.chorus().map(|c| c.name()).collect();
    assert!(!chorus_names.contains(&demo.featured().name()));
}

#[test]
fn test_blank_roster_entry_is_rejected() {
    let roster = RosterConfig::from_toml_str("[dog]\nbreed = \"\"").unwrap();
    let err = roster.validate().unwrap_err();
    assert!(matches!(
        err,
        BestiaryError::InvalidConfigValueError { ref field, .. } if field == "dog.breed"
    ));
    assert_eq!(err.exit_code(), 1);
}
