//! The root host object
//!
//! `Host` is the only wrapper built directly from a host reference; every
//! other wrapper is reached by navigating from it.

use surface_sdk::{wrapper_class, HostCallback, HostRef, HostResult, HostValue, Wrapper, API_PROXY};

use crate::application::{Application, Arranger, Clip, Groove, Mixer, Project, Transport};
use crate::application::{APPLICATION, ARRANGER, CLIP, GROOVE, MIXER, PROJECT, TRANSPORT};
use crate::channels::{CursorTrack, SceneBank, Track, TrackBank, UserControlBank};
use crate::channels::{CURSOR_TRACK, SCENE_BANK, TRACK, TRACK_BANK, USER_CONTROL_BANK};
use crate::devices::{CursorDevice, CURSOR_DEVICE};
use crate::midi::{MidiIn, MidiOut, MIDI_IN, MIDI_OUT};
use crate::remote::{RemoteSocket, REMOTE_SOCKET};
use crate::settings::{DocumentState, NotificationSettings, Preferences};
use crate::settings::{DOCUMENT_STATE, NOTIFICATION_SETTINGS, PREFERENCES};

wrapper_class! {
    /// Entry point of a controller script.
    pub struct Host: HOST extends API_PROXY {
        "getMidiInPort" => MIDI_IN: Accessor,
        "getMidiOutPort" => MIDI_OUT: Accessor,
        "getPreferences" => PREFERENCES: Accessor,
        "getDocumentState" => DOCUMENT_STATE: Accessor,
        "getNotificationSettings" => NOTIFICATION_SETTINGS: Accessor,
        "getProject" => PROJECT: Accessor,
        "createTransport" => TRANSPORT: Factory,
        "createGroove" => GROOVE: Factory,
        "createApplication" => APPLICATION: Factory,
        "createArranger" => ARRANGER: Factory,
        "createMixer" => MIXER: Factory,
        "createTrackBank" => TRACK_BANK: Factory,
        "createMainTrackBank" => TRACK_BANK: Factory,
        "createEffectTrackBank" => TRACK_BANK: Factory,
        "createMasterTrack" => TRACK: Factory,
        "createArrangerCursorTrack" => CURSOR_TRACK: Factory,
        "createCursorTrack" => CURSOR_TRACK: Factory,
        "createSceneBank" => SCENE_BANK: Factory,
        "createEditorCursorDevice" => CURSOR_DEVICE: Factory,
        "createCursorClip" => CLIP: Factory,
        "createUserControls" => USER_CONTROL_BANK: Factory,
        "createRemoteConnection" => REMOTE_SOCKET: Factory,
    }
}

impl Host {
    /// Wrap the host object handed to the script.
    ///
    /// Makes no host calls.
    pub fn new(target: HostRef) -> Self {
        tracing::debug!(kind = target.type_name(), "wrapping host root");
        Self::wrap(target)
    }

    // Controller definition

    /// Declare the controller
    pub fn define_controller(
        &self,
        vendor: &str,
        name: &str,
        version: &str,
        uuid: &str,
        author: &str,
    ) -> HostResult<()> {
        self.proxy().call_void(
            "defineController",
            &[
                vendor.into(),
                name.into(),
                version.into(),
                uuid.into(),
                author.into(),
            ],
        )
    }

    /// Declare the number of MIDI ports
    pub fn define_midi_ports(&self, inputs: i64, outputs: i64) -> HostResult<()> {
        self.proxy()
            .call_void("defineMidiPorts", &[inputs.into(), outputs.into()])
    }

    /// Register port names used for automatic detection
    pub fn add_device_name_based_discovery_pair(
        &self,
        inputs: &[&str],
        outputs: &[&str],
    ) -> HostResult<()> {
        self.proxy().call_void(
            "addDeviceNameBasedDiscoveryPair",
            &[inputs.to_vec().into(), outputs.to_vec().into()],
        )
    }

    /// Register the sysex identity reply used for automatic detection
    pub fn define_sysex_identity_reply(&self, reply: &str) -> HostResult<()> {
        self.proxy()
            .call_void("defineSysexIdentityReply", &[reply.into()])
    }

    // Accessors

    /// MIDI input port `index`
    pub fn midi_in_port(&self, index: i64) -> HostResult<MidiIn> {
        self.proxy().call_wrapped("getMidiInPort", &[index.into()])
    }

    /// MIDI output port `index`
    pub fn midi_out_port(&self, index: i64) -> HostResult<MidiOut> {
        self.proxy().call_wrapped("getMidiOutPort", &[index.into()])
    }

    /// Controller preferences
    pub fn preferences(&self) -> HostResult<Preferences> {
        self.proxy().call_wrapped("getPreferences", &[])
    }

    /// Settings stored with the document
    pub fn document_state(&self) -> HostResult<DocumentState> {
        self.proxy().call_wrapped("getDocumentState", &[])
    }

    /// Popup notification switches
    pub fn notification_settings(&self) -> HostResult<NotificationSettings> {
        self.proxy().call_wrapped("getNotificationSettings", &[])
    }

    /// The open project
    pub fn project(&self) -> HostResult<Project> {
        self.proxy().call_wrapped("getProject", &[])
    }

    // Factories

    /// New transport section
    pub fn create_transport(&self) -> HostResult<Transport> {
        self.proxy().call_wrapped("createTransport", &[])
    }

    /// New groove section
    pub fn create_groove(&self) -> HostResult<Groove> {
        self.proxy().call_wrapped("createGroove", &[])
    }

    /// New application section
    pub fn create_application(&self) -> HostResult<Application> {
        self.proxy().call_wrapped("createApplication", &[])
    }

    /// New arranger section, optionally bound to window `window`
    pub fn create_arranger(&self, window: Option<i64>) -> HostResult<Arranger> {
        let args: Vec<HostValue> = window.into_iter().map(HostValue::from).collect();
        self.proxy().call_wrapped("createArranger", &args)
    }

    /// New mixer section.
    ///
    /// `panel_layout` selects `"ARRANGE"`, `"MIX"` or `"EDIT"`; omitted
    /// arguments are not passed to the host.
    pub fn create_mixer(&self, panel_layout: Option<&str>, window: Option<i64>) -> HostResult<Mixer> {
        let mut args = Vec::new();
        if let Some(layout) = panel_layout {
            args.push(HostValue::from(layout));
        }
        if let Some(window) = window {
            args.push(HostValue::from(window));
        }
        self.proxy().call_wrapped("createMixer", &args)
    }

    /// New bank over every track
    pub fn create_track_bank(
        &self,
        num_tracks: i64,
        num_sends: i64,
        num_scenes: i64,
    ) -> HostResult<TrackBank> {
        self.proxy().call_wrapped(
            "createTrackBank",
            &[num_tracks.into(), num_sends.into(), num_scenes.into()],
        )
    }

    /// New bank over the instrument and audio tracks
    pub fn create_main_track_bank(
        &self,
        num_tracks: i64,
        num_sends: i64,
        num_scenes: i64,
    ) -> HostResult<TrackBank> {
        self.proxy().call_wrapped(
            "createMainTrackBank",
            &[num_tracks.into(), num_sends.into(), num_scenes.into()],
        )
    }

    /// New bank over the effect tracks
    pub fn create_effect_track_bank(&self, num_tracks: i64, num_scenes: i64) -> HostResult<TrackBank> {
        self.proxy().call_wrapped(
            "createEffectTrackBank",
            &[num_tracks.into(), num_scenes.into()],
        )
    }

    /// New view of the master track
    pub fn create_master_track(&self, num_scenes: i64) -> HostResult<Track> {
        self.proxy()
            .call_wrapped("createMasterTrack", &[num_scenes.into()])
    }

    /// New cursor following the track selected in the arranger
    pub fn create_arranger_cursor_track(
        &self,
        num_sends: i64,
        num_scenes: i64,
    ) -> HostResult<CursorTrack> {
        self.proxy().call_wrapped(
            "createArrangerCursorTrack",
            &[num_sends.into(), num_scenes.into()],
        )
    }

    /// New named cursor track
    pub fn create_cursor_track(
        &self,
        name: &str,
        num_sends: i64,
        num_scenes: i64,
    ) -> HostResult<CursorTrack> {
        self.proxy().call_wrapped(
            "createCursorTrack",
            &[name.into(), num_sends.into(), num_scenes.into()],
        )
    }

    /// New bank over `num_scenes` scenes
    pub fn create_scene_bank(&self, num_scenes: i64) -> HostResult<SceneBank> {
        self.proxy()
            .call_wrapped("createSceneBank", &[num_scenes.into()])
    }

    /// New cursor following the device selected in the editor
    pub fn create_editor_cursor_device(&self, num_sends: Option<i64>) -> HostResult<CursorDevice> {
        let args: Vec<HostValue> = num_sends.into_iter().map(HostValue::from).collect();
        self.proxy().call_wrapped("createEditorCursorDevice", &args)
    }

    /// New cursor clip with a `grid_width` x `grid_height` step grid
    pub fn create_cursor_clip(&self, grid_width: i64, grid_height: i64) -> HostResult<Clip> {
        self.proxy().call_wrapped(
            "createCursorClip",
            &[grid_width.into(), grid_height.into()],
        )
    }

    /// New bank of `num_controls` freely assignable controls
    pub fn create_user_controls(&self, num_controls: i64) -> HostResult<UserControlBank> {
        self.proxy()
            .call_wrapped("createUserControls", &[num_controls.into()])
    }

    /// Open a listening TCP socket
    pub fn create_remote_connection(&self, name: &str, default_port: i64) -> HostResult<RemoteSocket> {
        self.proxy().call_wrapped(
            "createRemoteConnection",
            &[name.into(), default_port.into()],
        )
    }

    // Host information and services

    /// Run `callback` with `args` after `delay_ms`
    pub fn schedule_task(
        &self,
        callback: HostCallback,
        args: Vec<HostValue>,
        delay_ms: i64,
    ) -> HostResult<()> {
        self.proxy().call_void(
            "scheduleTask",
            &[callback.into(), args.into(), delay_ms.into()],
        )
    }

    /// Scripting API version
    pub fn host_api_version(&self) -> HostResult<i64> {
        self.proxy().call_as("getHostApiVersion", &[])
    }

    /// Host vendor name
    pub fn host_vendor(&self) -> HostResult<String> {
        self.proxy().call_as("getHostVendor", &[])
    }

    /// Host product name
    pub fn host_product(&self) -> HostResult<String> {
        self.proxy().call_as("getHostProduct", &[])
    }

    /// Host version string
    pub fn host_version(&self) -> HostResult<String> {
        self.proxy().call_as("getHostVersion", &[])
    }

    /// Whether the host runs on Windows
    pub fn platform_is_windows(&self) -> HostResult<bool> {
        self.proxy().call_as("platformIsWindows", &[])
    }

    /// Whether the host runs on macOS
    pub fn platform_is_mac(&self) -> HostResult<bool> {
        self.proxy().call_as("platformIsMac", &[])
    }

    /// Whether the host runs on Linux
    pub fn platform_is_linux(&self) -> HostResult<bool> {
        self.proxy().call_as("platformIsLinux", &[])
    }

    /// Print to the script console
    pub fn println(&self, text: &str) -> HostResult<()> {
        self.proxy().call_void("println", &[text.into()])
    }

    /// Print to the script console's error stream
    pub fn errorln(&self, text: &str) -> HostResult<()> {
        self.proxy().call_void("errorln", &[text.into()])
    }

    /// Show a popup notification in the host UI
    pub fn show_popup_notification(&self, text: &str) -> HostResult<()> {
        self.proxy()
            .call_void("showPopupNotification", &[text.into()])
    }

    /// Connect to a TCP server; `callback` receives the connection
    pub fn connect_to_remote_host(
        &self,
        host: &str,
        port: i64,
        callback: HostCallback,
    ) -> HostResult<()> {
        self.proxy().call_void(
            "connectToRemoteHost",
            &[host.into(), port.into(), callback.into()],
        )
    }

    /// Send a UDP packet. Bytes go to the host as signed values.
    pub fn send_datagram_packet(&self, host: &str, port: i64, data: &[u8]) -> HostResult<()> {
        let bytes: Vec<i64> = data.iter().map(|&b| i64::from(b as i8)).collect();
        self.proxy().call_void(
            "sendDatagramPacket",
            &[host.into(), port.into(), bytes.into()],
        )
    }

    /// Listen for UDP packets on `port`; false if the port is unavailable
    pub fn add_datagram_packet_observer(
        &self,
        name: &str,
        port: i64,
        callback: HostCallback,
    ) -> HostResult<bool> {
        self.proxy().call_as(
            "addDatagramPacketObserver",
            &[name.into(), port.into(), callback.into()],
        )
    }
}
