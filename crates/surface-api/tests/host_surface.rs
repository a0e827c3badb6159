//! Host surface tests against the simulated host

use std::cell::RefCell;
use std::rc::Rc;

use surface_api::*;
use surface_sdk::{same_object, CachePolicy, HostCallback, HostError, HostValue, Wrapper};
use surface_sim::{Behaviour, HostFixture, SimRuntime};

fn setup() -> (SimRuntime, Host) {
    let rt = SimRuntime::with_default_fixture().unwrap();
    let host = Host::new(rt.root());
    (rt, host)
}

#[test]
fn test_host_construction_makes_no_calls() {
    let (rt, _host) = setup();
    assert_eq!(rt.call_count(), 0);
}

#[test]
fn test_midi_ports_are_cached_per_index() {
    let (rt, host) = setup();

    let a = host.midi_in_port(0).unwrap();
    let b = host.midi_in_port(0).unwrap();
    let c = host.midi_in_port(1).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(rt.calls_to("getMidiInPort"), 3);
    assert_eq!(host.proxy().cache_len(), 2);
}

#[test]
fn test_unmapped_members_return_plain_values() {
    let (_rt, host) = setup();
    assert_eq!(host.host_vendor().unwrap(), "Bitwig");
    assert_eq!(host.host_product().unwrap(), "Bitwig Studio");
    assert_eq!(host.host_api_version().unwrap(), 1);
    assert!(host.platform_is_linux().unwrap());
    assert!(!host.platform_is_mac().unwrap());

    let raw = host.call("getHostVendor", &[]).unwrap();
    assert_eq!(raw.into_value(), HostValue::string("Bitwig"));
}

#[test]
fn test_void_members_succeed() {
    let (rt, host) = setup();
    host.define_controller("Acme", "Pad", "1.0", "uuid", "me")
        .unwrap();
    host.define_midi_ports(1, 1).unwrap();
    host.println("hello").unwrap();
    assert_eq!(rt.calls_to("defineController"), 1);
    assert_eq!(
        rt.calls().last().unwrap().args,
        vec![HostValue::string("hello")]
    );
}

#[test]
fn test_factories_return_fresh_wrappers() {
    let (_rt, host) = setup();

    let a = host.create_track_bank(8, 2, 4).unwrap();
    let b = host.create_track_bank(8, 2, 4).unwrap();
    assert_ne!(a, b);
    assert!(!same_object(a.target(), b.target()));

    let t1 = host.create_transport().unwrap();
    let t2 = host.create_transport().unwrap();
    assert_ne!(t1, t2);
    assert_eq!(host.proxy().cache_len(), 0);
}

#[test]
fn test_wrapped_target_is_host_result() {
    let (rt, host) = setup();
    let bank = host.create_main_track_bank(4, 0, 0).unwrap();
    let sim = rt.lookup(bank.target()).unwrap();
    assert_eq!(sim.kind(), "TrackBank");
    assert_eq!(bank.proxy().class().name, "TrackBank");
}

#[test]
fn test_chained_navigation() {
    let (rt, host) = setup();

    let bank = host.create_main_track_bank(8, 2, 4).unwrap();
    let track = bank.track(0).unwrap();
    let volume = track.volume().unwrap();
    volume.set(64.0, 128).unwrap();

    let again = bank.track(0).unwrap().volume().unwrap();
    assert_eq!(volume, again);
    assert_eq!(rt.lookup(volume.target()).unwrap().kind(), "AutomatableRangedValue");
}

#[test]
fn test_cursor_track_narrows_primary_device() {
    let (_rt, host) = setup();

    let cursor = host.create_cursor_track("main", 2, 0).unwrap();
    let primary: PrimaryDevice = cursor.primary_device().unwrap();
    assert_eq!(primary.proxy().class().name, "PrimaryDevice");
    primary.switch_to_device("instrument", "last").unwrap();

    // Through the inherited member the result is still the narrowed proxy.
    let device: Device = TrackApi::primary_device(&cursor).unwrap();
    assert!(device.same_as(&primary));

    let master = host.create_master_track(0).unwrap();
    let device = master.primary_device().unwrap();
    assert_eq!(device.proxy().class().name, "Device");
}

#[test]
fn test_track_bank_narrows_channels() {
    let (_rt, host) = setup();

    let bank = host.create_track_bank(8, 0, 0).unwrap();
    let track: Track = bank.channel(0).unwrap();
    track.arm().unwrap().toggle().unwrap();
    assert_eq!(track.proxy().class().name, "Track");

    let channel: Channel = ChannelBankApi::channel(&bank, 0).unwrap();
    assert!(channel.same_as(&track));
}

#[test]
fn test_inherited_members_on_subclasses() {
    let (_rt, host) = setup();

    let cursor = host.create_arranger_cursor_track(2, 0).unwrap();
    let solo = cursor.solo().unwrap();
    solo.toggle_exclusive(true).unwrap();
    solo.set(false).unwrap();
    cursor.send(1).unwrap().reset().unwrap();
    cursor.select_next().unwrap();
}

#[test]
fn test_settings_are_factories() {
    let (rt, host) = setup();

    let prefs = host.preferences().unwrap();
    assert_eq!(prefs, host.preferences().unwrap());

    let a = prefs
        .number_setting("Sensitivity", "Knobs", 0.0, 1.0, 0.01, "", 0.5)
        .unwrap();
    let b = prefs
        .number_setting("Sensitivity", "Knobs", 0.0, 1.0, 0.01, "", 0.5)
        .unwrap();
    assert_ne!(a, b);
    assert_eq!(prefs.proxy().cache_len(), 0);

    let mode = host
        .document_state()
        .unwrap()
        .enum_setting("Mode", "Pads", &["Notes", "Drums"], "Notes")
        .unwrap();
    mode.set("Drums").unwrap();
    assert_eq!(
        rt.calls().last().unwrap().args,
        vec![HostValue::string("Drums")]
    );
}

#[test]
fn test_notification_settings() {
    let (rt, host) = setup();

    let settings = host.notification_settings().unwrap();
    let enabled = settings.user_notifications_enabled().unwrap();
    assert_eq!(enabled, settings.user_notifications_enabled().unwrap());
    enabled.set(true).unwrap();

    settings.set_should_show_selection_notifications(true).unwrap();
    settings.set_should_show_channel_selection_notifications(true).unwrap();
    settings.set_should_show_track_selection_notifications(true).unwrap();
    settings
        .set_should_show_controller_selection_notifications(false)
        .unwrap();
    settings
        .set_should_show_controller_layer_selection_notifications(false)
        .unwrap();
    settings.set_should_show_preset_notifications(true).unwrap();
    settings.set_should_show_mapping_notifications(true).unwrap();
    settings.set_should_show_value_notifications(false).unwrap();
    assert_eq!(rt.calls_to("setShouldShowValueNotifications"), 1);
}

#[test]
fn test_browsing_session_bank() {
    let (_rt, host) = setup();

    let browser = host
        .create_editor_cursor_device(None)
        .unwrap()
        .create_device_browser(2, 1)
        .unwrap();
    let bank = browser.create_session_bank(4).unwrap();

    assert_eq!(bank.size().unwrap(), 4);
    let first = bank.session(0).unwrap();
    assert_eq!(first, bank.session(0).unwrap());
    assert_ne!(first, bank.session(1).unwrap());
    assert_eq!(first.proxy().class().name, "GenericBrowsingSession");
    first.activate().unwrap();

    bank.scroll_page_down().unwrap();
    bank.scroll_up().unwrap();
}

#[test]
fn test_observer_callbacks_reach_the_script() {
    let (rt, host) = setup();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let port = host.midi_in_port(0).unwrap();
    port.set_midi_callback(HostCallback::observer(move |args| {
        sink.borrow_mut().push(args.to_vec())
    }))
    .unwrap();

    let sim = rt.lookup(port.target()).unwrap();
    sim.fire(
        "setMidiCallback",
        &[HostValue::Int(0x90), HostValue::Int(60), HostValue::Int(100)],
    )
    .unwrap();

    assert_eq!(
        seen.borrow().as_slice(),
        [vec![
            HostValue::Int(0x90),
            HostValue::Int(60),
            HostValue::Int(100)
        ]]
    );
}

#[test]
fn test_remote_connection_from_callback() {
    let (rt, host) = setup();

    let socket = host.create_remote_connection("osc", 9000).unwrap();
    assert_eq!(socket.port().unwrap(), 8888);

    let accepted = Rc::new(RefCell::new(None));
    let slot = accepted.clone();
    socket
        .set_client_connect_callback(HostCallback::observer(move |args| {
            if let Some(obj) = args.first().and_then(HostValue::as_object) {
                *slot.borrow_mut() = Some(RemoteConnection::wrap(obj.clone()));
            }
        }))
        .unwrap();

    // Hand the callback an arbitrary object; the host decides what it is.
    let sim = rt.lookup(socket.target()).unwrap();
    sim.fire("setClientConnectCallback", &[HostValue::Object(rt.root())])
        .unwrap();

    let connection = accepted.borrow_mut().take().unwrap();
    assert!(same_object(connection.target(), &rt.root()));
}

#[test]
fn test_bytes_are_sent_signed() {
    let (rt, host) = setup();
    host.send_datagram_packet("127.0.0.1", 9000, &[0xF0, 0x7F, 0x80])
        .unwrap();
    assert_eq!(
        rt.calls().last().unwrap().args[2],
        HostValue::array([HostValue::Int(-16), HostValue::Int(127), HostValue::Int(-128)])
    );

    let fixture = HostFixture::from_toml_str(
        "root = \"RemoteConnection\"\n[objects.RemoteConnection.methods]\nsend = {}",
    )
    .unwrap();
    let rt = SimRuntime::from_fixture(fixture);
    let connection = RemoteConnection::wrap(rt.root());
    connection.send(&[0xF0, 0x00]).unwrap();
    assert_eq!(
        rt.calls().last().unwrap().args,
        vec![HostValue::array([HostValue::Int(-16), HostValue::Int(0)])]
    );
}

#[test]
fn test_host_errors_propagate() {
    let fixture = HostFixture::from_toml_str(
        r#"
root = "Host"
[objects.Host.methods]
getMidiInPort = { error = "no such port" }
getProject = { returns = 3 }
"#,
    )
    .unwrap();
    let rt = SimRuntime::from_fixture(fixture);
    let host = Host::new(rt.root());

    let err = host.midi_in_port(5).unwrap_err();
    assert_eq!(err.to_string(), "getMidiInPort: no such port");
    assert_eq!(
        err.diagnostic(),
        Some("ControlSurfaceException at Host.getMidiInPort")
    );
    assert_eq!(host.proxy().cache_len(), 0);

    let err = host.project().unwrap_err();
    assert!(matches!(err, HostError::TypeMismatch { .. }));

    let err = host.create_transport().unwrap_err();
    assert_eq!(err.diagnostic(), Some("TypeError"));
}

#[test]
fn test_registry_lists_every_class() {
    let registry = registry();
    assert_eq!(registry.len(), CLASSES.len() + 1);
    assert!(registry.contains("ApiProxy"));

    let track = registry.get("Track").unwrap();
    let subclasses: Vec<_> = registry
        .subclasses_of(track)
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(subclasses, ["CursorTrack", "MasterTrack"]);

    let cursor = registry.get("CursorTrack").unwrap();
    assert_eq!(
        cursor.resolve("getPrimaryDevice").unwrap().class.name,
        "PrimaryDevice"
    );
    assert_eq!(cursor.resolve("getVolume").unwrap().class.name, "AutomatableRangedValue");
}

#[test]
fn test_default_fixture_matches_declared_policies() {
    let registry = registry();
    let fixture = HostFixture::default_fixture().unwrap();

    for class in CLASSES {
        assert!(
            fixture.objects.contains_key(class.name),
            "fixture lacks {}",
            class.name
        );
        for binding in class.effective_bindings() {
            let behaviour = fixture.behaviour(class.name, binding.method);
            let kind = match (&behaviour, binding.policy) {
                (Some(Behaviour::Accessor(kind)), CachePolicy::Accessor) => kind,
                (Some(Behaviour::Factory(kind)), CachePolicy::Factory) => kind,
                _ => panic!(
                    "{}.{} is declared {} but the fixture has {:?}",
                    class.name, binding.method, binding.policy, behaviour
                ),
            };
            let produced = registry.get(kind).unwrap();
            assert!(
                produced.is_subclass_of(binding.class),
                "{}.{} produces {} which is not a {}",
                class.name,
                binding.method,
                kind,
                binding.class.name
            );
        }
    }
}
