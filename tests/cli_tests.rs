use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn petshop_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("petshop"));
    cmd.env_remove("DATABASE_URL")
        .env_remove("PETSHOP_ENV")
        .env_remove("RUST_LOG");
    cmd
}

fn database_url(temp_dir: &TempDir) -> String {
    format!(
        "sqlite://{}?mode=rwc",
        temp_dir.path().join("petshop.db").display()
    )
}

fn petshop_in(temp_dir: &TempDir) -> Command {
    let mut cmd = petshop_cmd();
    cmd.current_dir(temp_dir.path())
        .args(["--database-url", &database_url(temp_dir)]);
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    petshop_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("owners and their pets"));
}

#[test]
fn test_version() {
    petshop_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("petshop"));
}

#[test]
fn test_schema_prints_sdl() {
    petshop_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type RootQueryType"))
        .stdout(predicate::str::contains("favorite_treat"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_init_writes_environment_blocks() {
    let temp_dir = TempDir::new().unwrap();

    petshop_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let config = std::fs::read_to_string(temp_dir.path().join("petshop.yml")).unwrap();
    assert!(config.contains("development:"));
    assert!(config.contains("production:"));
    assert!(config.contains("test:"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("petshop.yml"), "development: {}\n").unwrap();

    petshop_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_unknown_environment_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("petshop.yml"),
        "development:\n  database_url: \"sqlite::memory:\"\n",
    )
    .unwrap();

    petshop_cmd()
        .args(["--env", "staging", "migrate"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("staging"));
}

#[test]
fn test_environment_selected_from_env_var() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("petshop.yml"),
        "test:\n  database_url: \"sqlite::memory:\"\n",
    )
    .unwrap();

    petshop_cmd()
        .env("PETSHOP_ENV", "test")
        .args(["query", "{ owners { id } }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"owners\": []"));
}

// =============================================================================
// Migrate, Seed, Query, Mutate
// =============================================================================

#[test]
fn test_migrate_creates_database() {
    let temp_dir = TempDir::new().unwrap();

    petshop_in(&temp_dir)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrated"));

    assert!(temp_dir.path().join("petshop.db").exists());
}

#[test]
fn test_seed_then_query_relationships() {
    let temp_dir = TempDir::new().unwrap();

    petshop_in(&temp_dir)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded"))
        .stdout(predicate::str::contains("Rex"));

    petshop_in(&temp_dir)
        .args(["query", "{ owner(id: 1) { name pets { name } } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Ann\""))
        .stdout(predicate::str::contains("\"Rex\""))
        .stdout(predicate::str::contains("\"Tom\""));
}

#[test]
fn test_mutate_add_and_delete_owner() {
    let temp_dir = TempDir::new().unwrap();

    petshop_in(&temp_dir)
        .args(["mutate", r#"addOwner(name: "Ann", age: 30) { id name }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Ann\""));

    petshop_in(&temp_dir)
        .args(["mutate", r#"deleteOwner(id: "1")"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"deleteOwner\": \"Success\""));

    petshop_in(&temp_dir)
        .args(["mutate", r#"deleteOwner(id: "1")"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("Something went wrong"));
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    petshop_in(&temp_dir)
        .args([
            "mutate",
            "addOwner(name: $name, age: $age) { id }",
            "--variables",
            r#"{"name": "Bob", "age": 41}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"));

    petshop_in(&temp_dir)
        .args([
            "query",
            "mutation($name: String!, $age: Int!) { addOwner(name: $name, age: $age) { name age } }",
            "--variables",
            r#"{"name": "Bob", "age": 41}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"age\": 41"));
}

#[test]
fn test_invalid_variables_json_fails() {
    let temp_dir = TempDir::new().unwrap();

    petshop_in(&temp_dir)
        .args(["query", "{ owners { id } }", "--variables", "not json"])
        .assert()
        .failure();
}
