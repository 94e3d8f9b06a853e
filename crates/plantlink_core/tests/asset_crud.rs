use plantlink_core::{
    Asset, AssetRepository, ConnectionProvider, ConnectionSpec, DeviceId, DeviceRepository,
    NewAsset, NewDevice, RepoError, SqliteAssetRepository, SqliteDeviceRepository,
};

fn provider() -> ConnectionProvider {
    ConnectionProvider::new(ConnectionSpec::in_memory()).unwrap()
}

fn seed_device(provider: &ConnectionProvider, name: &str) -> DeviceId {
    let repo = SqliteDeviceRepository::new(provider);
    repo.create_device(&NewDevice {
        name: name.to_string(),
        description: None,
    })
    .unwrap()
}

fn sensor(name: &str, device_id: DeviceId) -> NewAsset {
    NewAsset {
        name: name.to_string(),
        device_id,
    }
}

#[test]
fn create_and_get_roundtrip_keeps_parent_reference() {
    let provider = provider();
    let device_id = seed_device(&provider, "Pump-1");
    let repo = SqliteAssetRepository::new(&provider);

    let id = repo.create_asset(&sensor("Sensor-A", device_id)).unwrap();
    assert!(id > 0);

    let loaded = repo.get_asset(id).unwrap().unwrap();
    assert_eq!(
        loaded,
        Asset {
            asset_id: id,
            name: "Sensor-A".to_string(),
            device_id,
        }
    );
}

#[test]
fn create_with_missing_device_fails_and_writes_nothing() {
    let provider = provider();
    let repo = SqliteAssetRepository::new(&provider);

    let err = repo.create_asset(&sensor("Sensor-B", 99)).unwrap_err();
    assert!(matches!(
        err,
        RepoError::MissingParent {
            parent: "device",
            id: 99
        }
    ));

    assert!(repo.list_assets().unwrap().is_empty());
}

#[test]
fn update_with_missing_device_fails_and_leaves_row_untouched() {
    let provider = provider();
    let device_id = seed_device(&provider, "Pump-1");
    let repo = SqliteAssetRepository::new(&provider);

    let id = repo.create_asset(&sensor("Sensor-A", device_id)).unwrap();

    let rewired = Asset {
        asset_id: id,
        name: "Sensor-A rewired".to_string(),
        device_id: 99,
    };
    let err = repo.update_asset(&rewired).unwrap_err();
    assert!(matches!(
        err,
        RepoError::MissingParent {
            parent: "device",
            id: 99
        }
    ));

    let loaded = repo.get_asset(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Sensor-A");
    assert_eq!(loaded.device_id, device_id);
}

#[test]
fn update_can_move_asset_between_existing_devices() {
    let provider = provider();
    let device_a = seed_device(&provider, "Pump-1");
    let device_b = seed_device(&provider, "Pump-2");
    let repo = SqliteAssetRepository::new(&provider);

    let id = repo.create_asset(&sensor("Sensor-A", device_a)).unwrap();

    let moved = Asset {
        asset_id: id,
        name: "Sensor-A".to_string(),
        device_id: device_b,
    };
    assert_eq!(repo.update_asset(&moved).unwrap(), 1);
    assert_eq!(repo.get_asset(id).unwrap().unwrap().device_id, device_b);
}

#[test]
fn update_missing_asset_reports_zero_rows() {
    let provider = provider();
    let device_id = seed_device(&provider, "Pump-1");
    let repo = SqliteAssetRepository::new(&provider);

    let ghost = Asset {
        asset_id: 404,
        name: "Ghost".to_string(),
        device_id,
    };
    assert_eq!(repo.update_asset(&ghost).unwrap(), 0);
}

#[test]
fn delete_is_idempotent() {
    let provider = provider();
    let device_id = seed_device(&provider, "Pump-1");
    let repo = SqliteAssetRepository::new(&provider);

    let id = repo.create_asset(&sensor("Sensor-A", device_id)).unwrap();

    assert_eq!(repo.delete_asset(id).unwrap(), 1);
    assert_eq!(repo.delete_asset(id).unwrap(), 0);
}

#[test]
fn list_returns_assets_in_id_order() {
    let provider = provider();
    let device_id = seed_device(&provider, "Pump-1");
    let repo = SqliteAssetRepository::new(&provider);

    let id_a = repo.create_asset(&sensor("Sensor-A", device_id)).unwrap();
    let id_b = repo.create_asset(&sensor("Sensor-B", device_id)).unwrap();

    let assets = repo.list_assets().unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].asset_id, id_a);
    assert_eq!(assets[1].asset_id, id_b);
}

#[test]
fn invalid_name_is_rejected_before_the_parent_check() {
    let provider = provider();
    let repo = SqliteAssetRepository::new(&provider);

    // Both the name and the parent are invalid; validation wins.
    let err = repo.create_asset(&sensor("", 99)).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}
