//! End-to-end resolution runs over real files and a mock HTTP server.

use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

use realm_import::{ImportConfig, ImportError, ImportFormat, resolve};

#[test]
fn resolves_directory_of_mixed_formats() {
    let dir = TempDir::new().unwrap();
    dir.child("alpha.yaml").write_str("realm: alpha\nenabled: true\n").unwrap();
    dir.child("beta.yml").write_str("realm: beta\n").unwrap();
    dir.child("gamma.json").write_str(r#"{"realm": "gamma", "enabled": false}"#).unwrap();
    dir.child("ignored").create_dir_all().unwrap();
    dir.child("ignored/delta.yaml").write_str("realm: delta\n").unwrap();

    let imports = resolve(ImportConfig::new(dir.path().to_str().unwrap())).unwrap();

    assert_eq!(imports.len(), 3);
    let keys: Vec<&String> = imports.keys().collect();
    assert_eq!(keys, ["alpha.yaml", "beta.yml", "gamma.json"]);
    assert_eq!(imports.get("gamma.json").unwrap().realm(), "gamma");
}

#[test]
fn resolves_single_file_with_checksum_of_contents() {
    let dir = TempDir::new().unwrap();
    let content = "realm: solo\ndisplayName: Solo Realm\n";
    dir.child("solo.yaml").write_str(content).unwrap();

    let imports =
        resolve(ImportConfig::new(dir.child("solo.yaml").path().to_str().unwrap())).unwrap();

    assert_eq!(imports.len(), 1);
    let import = imports.get("solo.yaml").unwrap();
    assert_eq!(import.realm(), "solo");
    assert_eq!(import.checksum(), realm_import::services::checksum(content.as_bytes()));
}

#[test]
fn resolves_remote_document_with_basic_auth() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/imports/realm.json")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .with_status(200)
        .with_body(r#"{"realm": "remote", "enabled": true}"#)
        .expect(1)
        .create();

    let address = server.url().strip_prefix("http://").unwrap().to_string();
    let path = format!("http://user:pass@{address}/imports/realm.json");

    let imports = resolve(ImportConfig::new(path)).unwrap();

    assert_eq!(imports.len(), 1);
    let import = imports.get("realm.json").unwrap();
    assert_eq!(import.realm(), "remote");
    assert_eq!(import.representation().enabled, Some(true));
    mock.assert();
}

#[test]
fn substitutes_environment_variables_before_checksumming() {
    unsafe { std::env::set_var("IMPORT_FLOW_REALM", "interpolated") };

    let dir = TempDir::new().unwrap();
    dir.child("realm.yaml").write_str("realm: ${IMPORT_FLOW_REALM}\n").unwrap();

    let config = ImportConfig::new(dir.child("realm.yaml").path().to_str().unwrap())
        .with_var_substitution(true);
    let imports = resolve(config).unwrap();

    let import = imports.get("realm.yaml").unwrap();
    assert_eq!(import.realm(), "interpolated");
    // The digest covers the effective text, not the template.
    assert_eq!(import.checksum(), realm_import::services::checksum(b"realm: interpolated\n"));
}

#[test]
fn undefined_variable_aborts_when_strict() {
    let dir = TempDir::new().unwrap();
    dir.child("realm.yaml").write_str("realm: ${IMPORT_FLOW_UNDEFINED}\n").unwrap();

    let config = ImportConfig::new(dir.child("realm.yaml").path().to_str().unwrap())
        .with_var_substitution(true)
        .with_var_substitution_undefined_throws_exceptions(true);

    let err = resolve(config).unwrap_err();
    assert!(matches!(err, ImportError::UndefinedVariable(name) if name == "IMPORT_FLOW_UNDEFINED"));
}

#[test]
fn unknown_field_fails_regardless_of_format() {
    let dir = TempDir::new().unwrap();
    dir.child("realm.yaml").write_str("realm: a\nnotARealmField: true\n").unwrap();

    let err = resolve(ImportConfig::new(dir.child("realm.yaml").path().to_str().unwrap()))
        .unwrap_err();
    assert!(matches!(err, ImportError::Decode { .. }));
    assert!(predicate::str::contains("notARealmField").eval(&err.to_string()));

    let dir = TempDir::new().unwrap();
    dir.child("realm.json").write_str(r#"{"realm": "a", "notARealmField": true}"#).unwrap();

    let err = resolve(ImportConfig::new(dir.child("realm.json").path().to_str().unwrap()))
        .unwrap_err();
    assert!(matches!(err, ImportError::Decode { .. }));
}

#[test]
fn explicit_json_format_overrides_extension() {
    let dir = TempDir::new().unwrap();
    dir.child("realm.conf").write_str(r#"{"realm": "forced"}"#).unwrap();

    let config = ImportConfig::new(dir.child("realm.conf").path().to_str().unwrap())
        .with_file_type(ImportFormat::Json);
    let imports = resolve(config).unwrap();
    assert_eq!(imports.get("realm.conf").unwrap().realm(), "forced");
}
