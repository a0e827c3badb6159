//! Loading fixtures from disk

use std::fs;

use surface_sim::{Behaviour, FixtureError, HostFixture, SimRuntime};
use surface_sdk::HostValue;
use tempfile::TempDir;

const TOML_FIXTURE: &str = r#"
root = "Host"

[objects.Host.methods]
getHostVendor = { returns = "Bitwig" }
getMidiInPort = { accessor = "MidiIn" }

[objects.MidiIn]
"#;

const JSON_FIXTURE: &str = r#"{
    "root": "Host",
    "objects": {
        "Host": { "methods": { "getHostApiVersion": { "returns": 2 } } }
    }
}"#;

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("host.toml");
    fs::write(&path, TOML_FIXTURE).unwrap();

    let rt = SimRuntime::load(&path).unwrap();
    assert_eq!(
        rt.root().invoke("getHostVendor", &[]).unwrap(),
        HostValue::string("Bitwig")
    );
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("host.json");
    fs::write(&path, JSON_FIXTURE).unwrap();

    let rt = SimRuntime::load(&path).unwrap();
    assert_eq!(
        rt.root().invoke("getHostApiVersion", &[]).unwrap(),
        HostValue::Int(2)
    );
}

#[test]
fn test_unknown_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("host.yaml");
    fs::write(&path, TOML_FIXTURE).unwrap();

    assert!(matches!(
        SimRuntime::load(&path),
        Err(FixtureError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        HostFixture::from_file(&path),
        Err(FixtureError::IoError(_))
    ));
}

#[test]
fn test_written_fixture_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("copy.toml");
    let fixture = HostFixture::default_fixture().unwrap();
    fs::write(&path, fixture.to_toml_string().unwrap()).unwrap();

    assert_eq!(HostFixture::from_file(&path).unwrap(), fixture);
}

#[test]
fn test_default_fixture_inheritance() {
    let fixture = HostFixture::default_fixture().unwrap();
    assert_eq!(
        fixture.behaviour("CursorTrack", "getPrimaryDevice"),
        Some(Behaviour::Accessor("PrimaryDevice".to_string()))
    );
    assert_eq!(
        fixture.behaviour("MasterTrack", "getPrimaryDevice"),
        Some(Behaviour::Accessor("Device".to_string()))
    );
    assert_eq!(
        fixture.behaviour("SoloValue", "addValueObserver"),
        Some(Behaviour::Observer)
    );
}

#[test]
fn test_default_runtime_navigation() {
    let rt = SimRuntime::with_default_fixture().unwrap();
    let bank = rt
        .root()
        .invoke("createTrackBank", &[8.into(), 2.into(), 4.into()])
        .unwrap();
    let track = bank
        .as_object()
        .unwrap()
        .invoke("getTrack", &[0.into()])
        .unwrap();
    assert_eq!(track.as_object().unwrap().type_name(), "Track");
    assert_eq!(rt.calls_to("getTrack"), 1);
}
