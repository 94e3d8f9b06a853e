use plantlink_core::{
    ConnectionProvider, ConnectionSpec, Device, DeviceRepository, NewDevice, RepoError,
    SqliteDeviceRepository,
};

fn provider() -> ConnectionProvider {
    ConnectionProvider::new(ConnectionSpec::in_memory()).unwrap()
}

fn pump(name: &str) -> NewDevice {
    NewDevice {
        name: name.to_string(),
        description: None,
    }
}

#[test]
fn create_and_get_roundtrip() {
    let provider = provider();
    let repo = SqliteDeviceRepository::new(&provider);

    let draft = NewDevice {
        name: "Pump-1".to_string(),
        description: Some("primary coolant pump".to_string()),
    };
    let id = repo.create_device(&draft).unwrap();
    assert!(id > 0);

    let loaded = repo.get_device(id).unwrap().unwrap();
    assert_eq!(
        loaded,
        Device {
            device_id: id,
            name: "Pump-1".to_string(),
            description: Some("primary coolant pump".to_string()),
        }
    );
}

#[test]
fn get_missing_device_returns_none() {
    let provider = provider();
    let repo = SqliteDeviceRepository::new(&provider);

    assert!(repo.get_device(404).unwrap().is_none());
}

#[test]
fn list_returns_devices_in_id_order() {
    let provider = provider();
    let repo = SqliteDeviceRepository::new(&provider);

    let id_a = repo.create_device(&pump("Pump-1")).unwrap();
    let id_b = repo.create_device(&pump("Pump-2")).unwrap();

    let devices = repo.list_devices().unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].device_id, id_a);
    assert_eq!(devices[1].device_id, id_b);
}

#[test]
fn generated_ids_are_never_reused() {
    let provider = provider();
    let repo = SqliteDeviceRepository::new(&provider);

    let id_first = repo.create_device(&pump("Pump-1")).unwrap();
    let id_second = repo.create_device(&pump("Pump-2")).unwrap();
    assert!(id_second > id_first);

    repo.delete_device(id_second).unwrap();
    let id_third = repo.create_device(&pump("Pump-3")).unwrap();
    assert!(id_third > id_second);
}

#[test]
fn update_replaces_the_full_record() {
    let provider = provider();
    let repo = SqliteDeviceRepository::new(&provider);

    let id = repo
        .create_device(&NewDevice {
            name: "Pump-1".to_string(),
            description: Some("old description".to_string()),
        })
        .unwrap();

    let updated = Device {
        device_id: id,
        name: "Pump-1 rebuilt".to_string(),
        description: None,
    };
    let changed = repo.update_device(&updated).unwrap();
    assert_eq!(changed, 1);

    let loaded = repo.get_device(id).unwrap().unwrap();
    assert_eq!(loaded, updated);
}

#[test]
fn update_missing_device_reports_zero_rows() {
    let provider = provider();
    let repo = SqliteDeviceRepository::new(&provider);

    let ghost = Device {
        device_id: 404,
        name: "Ghost".to_string(),
        description: None,
    };
    assert_eq!(repo.update_device(&ghost).unwrap(), 0);
}

#[test]
fn delete_is_idempotent() {
    let provider = provider();
    let repo = SqliteDeviceRepository::new(&provider);

    let id = repo.create_device(&pump("Pump-1")).unwrap();

    assert_eq!(repo.delete_device(id).unwrap(), 1);
    assert_eq!(repo.delete_device(id).unwrap(), 0);
    assert!(repo.get_device(id).unwrap().is_none());
}

#[test]
fn invalid_fields_are_rejected_before_any_sql() {
    let provider = provider();
    let repo = SqliteDeviceRepository::new(&provider);

    let empty_name = pump("");
    assert!(matches!(
        repo.create_device(&empty_name).unwrap_err(),
        RepoError::Validation(_)
    ));

    let bad_charset = pump("pump;drop table devices");
    assert!(matches!(
        repo.create_device(&bad_charset).unwrap_err(),
        RepoError::Validation(_)
    ));

    let overlong = pump(&"a".repeat(101));
    assert!(matches!(
        repo.create_device(&overlong).unwrap_err(),
        RepoError::Validation(_)
    ));

    assert!(repo.list_devices().unwrap().is_empty());
}

#[test]
fn invalid_update_leaves_stored_record_untouched() {
    let provider = provider();
    let repo = SqliteDeviceRepository::new(&provider);

    let id = repo.create_device(&pump("Pump-1")).unwrap();

    let invalid = Device {
        device_id: id,
        name: String::new(),
        description: None,
    };
    assert!(matches!(
        repo.update_device(&invalid).unwrap_err(),
        RepoError::Validation(_)
    ));

    let loaded = repo.get_device(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Pump-1");
}

#[test]
fn quoted_input_stays_data_not_statement_text() {
    let provider = provider();
    let repo = SqliteDeviceRepository::new(&provider);

    // The name charset forbids quotes, but the free-text description must
    // survive hostile content verbatim through bound parameters.
    let draft = NewDevice {
        name: "Pump-1".to_string(),
        description: Some("'); DROP TABLE devices; --".to_string()),
    };
    let id = repo.create_device(&draft).unwrap();

    let loaded = repo.get_device(id).unwrap().unwrap();
    assert_eq!(
        loaded.description.as_deref(),
        Some("'); DROP TABLE devices; --")
    );
    assert_eq!(repo.list_devices().unwrap().len(), 1);
}
