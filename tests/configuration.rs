//! Tests for configuration system

use alimento::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.planner.days, 7);
    assert_eq!(config.planner.preferences, "");
    assert_eq!(config.observability.log_level, "info");
    assert!(config.catalog.path.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_missing_file_falls_back_to_defaults() {
    let config = Config::load(Some("missing/alimento.toml".to_string()))
        .expect("Failed to load config");

    assert_eq!(config.planner.days, 7);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("alimento.toml");
    std::fs::write(
        &path,
        r#"
[catalog]
path = "/srv/catalog.json"

[planner]
days = 3
preferences = "vegan, gluten-free"
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.planner.days, 3);
    assert_eq!(config.planner.preferences, "vegan, gluten-free");
    assert_eq!(config.catalog.path.as_deref(), Some("/srv/catalog.json"));
    assert_eq!(config.observability.log_level, "info");

    Ok(())
}

#[test]
fn test_config_out_of_range_days_fail_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("alimento.toml");
    std::fs::write(&path, "[planner]\ndays = 30\n")?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert!(config.validate().is_err());

    Ok(())
}

#[test]
fn test_catalog_path_is_used() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let catalog = dir.child("catalog.json");
    std::fs::write(
        &catalog,
        r#"{
  "recipes": [
    {
      "id": "r1",
      "name": "Plain Rice",
      "prep_time": 2,
      "cook_time": 15,
      "servings": 2,
      "ingredients": [{ "name": "Rice", "amount": "1 cup" }],
      "instructions": ["Boil."],
      "nutrition": { "calories": 200, "protein": 4, "carbs": 45, "fat": 0.5 },
      "tags": ["vegan"]
    }
  ]
}"#,
    )?;
    let config_path = dir.child("alimento.toml");
    std::fs::write(
        &config_path,
        format!("[catalog]\npath = {:?}\n", catalog.to_string_lossy()),
    )?;

    let config = Config::load(Some(config_path.to_string_lossy().into_owned()))?;
    let loaded = alimento::cli::load_catalog(&config)?;

    assert_eq!(loaded.recipes().len(), 1);
    assert!(loaded.foods().is_empty());

    Ok(())
}
