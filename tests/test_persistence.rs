//! Integration tests for saving and loading address books.

use contact_book::repositories::FORMAT_VERSION;
use contact_book::{AddressBook, BookRepository, JsonFileRepository, LegacyTextImporter, Record};
use tempfile::TempDir;

fn populated_book() -> AddressBook {
    let mut john = Record::new("John Doe", Some("1990-05-17")).unwrap();
    john.add_phone("1112223333").unwrap();
    john.add_phone("4445556666").unwrap();

    let mut alice = Record::new("Alice Smith", None).unwrap();
    alice.add_phone("7778889999").unwrap();

    let nobody = Record::new("", None).unwrap();

    vec![john, alice, nobody].into_iter().collect()
}

#[test]
fn test_round_trip_preserves_everything() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    let book = populated_book();

    book.persist(&path).unwrap();
    let loaded = AddressBook::load(&path).unwrap();

    assert_eq!(loaded, book);
    assert_eq!(
        loaded.names().collect::<Vec<_>>(),
        book.names().collect::<Vec<_>>()
    );
    for original in book.records() {
        let restored = loaded.find(original.name()).unwrap();
        assert_eq!(restored.phones(), original.phones());
        assert_eq!(
            restored.birthday().map(|b| b.as_str()),
            original.birthday().map(|b| b.as_str())
        );
    }
}

#[test]
fn test_load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let book = AddressBook::load(dir.path().join("missing.json")).unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_persist_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");

    populated_book().persist(&path).unwrap();
    let mut smaller = AddressBook::new();
    smaller.add_record(Record::new("Solo", None).unwrap());
    smaller.persist(&path).unwrap();

    let loaded = AddressBook::load(&path).unwrap();
    assert_eq!(loaded.names().collect::<Vec<_>>(), vec!["Solo"]);
}

#[test]
fn test_file_layout() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));
    repo.save(&populated_book()).unwrap();

    let raw = std::fs::read_to_string(repo.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["version"], FORMAT_VERSION);
    assert_eq!(value["records"][0]["name"], "John Doe");
    assert_eq!(value["records"][0]["phones"][1], "4445556666");
    assert_eq!(value["records"][0]["birthday"], "1990-05-17");
    assert!(value["records"][1].get("birthday").is_none());
}

#[test]
fn test_load_corrupt_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    std::fs::write(&path, "not json at all").unwrap();

    assert!(AddressBook::load(&path).is_err());
}

#[test]
fn test_load_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = AddressBook::load(dir.path());
    assert!(result.is_err());
}

#[test]
fn test_legacy_import_then_save_as_json() {
    let dir = TempDir::new().unwrap();
    let legacy = dir.path().join("address_book_data.pkl");
    std::fs::write(&legacy, "John:1112223333\nAlice:4445556666\n").unwrap();

    let book = LegacyTextImporter::new(&legacy).import().unwrap();
    let json_path = dir.path().join("book.json");
    book.persist(&json_path).unwrap();

    let loaded = AddressBook::load(&json_path).unwrap();
    assert_eq!(loaded.names().collect::<Vec<_>>(), vec!["John", "Alice"]);
    assert_eq!(
        loaded.find("Alice").unwrap().phones()[0].as_str(),
        "4445556666"
    );
}
