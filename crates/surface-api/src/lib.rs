//! Surface API - typed wrappers for the controller host interface
//!
//! Start from [`Host::new`] with the root object the host hands to the
//! script and navigate from there:
//!
//! ```ignore
//! use surface_api::{ChannelApi, Host};
//!
//! let host = Host::new(root);
//! let bank = host.create_main_track_bank(8, 2, 4)?;
//! let volume = bank.track(0)?.volume()?;
//! ```
//!
//! Accessor results (`getX`) are wrapped once per argument tuple and reused;
//! factory results (`createX`) get a fresh wrapper on every call. Members
//! inherited from a parent interface live on capability traits such as
//! [`ChannelApi`], so bring those into scope.

#![warn(missing_docs)]

pub mod application;
pub mod browsing;
pub mod channels;
pub mod devices;
pub mod host;
pub mod midi;
pub mod remote;
pub mod settings;
pub mod values;

use surface_sdk::{ClassRegistry, ProxyClass};

pub use application::{Application, Arranger, Clip, Groove, Mixer, Project, Transport};
pub use browsing::{
    Browser, BrowsingSession, BrowsingSessionApi, BrowsingSessionBank, GenericBrowsingSession,
};
pub use channels::{
    Channel, ChannelApi, ChannelBank, ChannelBankApi, CursorTrack, MasterTrack, Scene, SceneBank,
    Track, TrackApi, TrackBank, UserControlBank,
};
pub use devices::{CursorDevice, Device, DeviceApi, PrimaryDevice};
pub use host::Host;
pub use midi::{MidiIn, MidiOut, NoteInput};
pub use remote::{RemoteConnection, RemoteSocket};
pub use settings::{DocumentState, NotificationSettings, Preferences, Settings, SettingsApi};
pub use values::{
    AutomatableRangedValue, AutomatableRangedValueApi, BooleanValue, BooleanValueApi, EnumValue,
    RangedValue, RangedValueApi, Signal, SoloValue, StringValue, Value, ValueApi,
};

/// Every class declared by this crate
pub static CLASSES: &[&ProxyClass] = &[
    &host::HOST,
    &midi::MIDI_IN,
    &midi::MIDI_OUT,
    &midi::NOTE_INPUT,
    &values::VALUE,
    &values::BOOLEAN_VALUE,
    &values::SOLO_VALUE,
    &values::RANGED_VALUE,
    &values::AUTOMATABLE_RANGED_VALUE,
    &values::ENUM_VALUE,
    &values::STRING_VALUE,
    &values::SIGNAL,
    &settings::SETTINGS,
    &settings::PREFERENCES,
    &settings::DOCUMENT_STATE,
    &settings::NOTIFICATION_SETTINGS,
    &channels::CHANNEL,
    &channels::TRACK,
    &channels::CURSOR_TRACK,
    &channels::MASTER_TRACK,
    &channels::CHANNEL_BANK,
    &channels::TRACK_BANK,
    &channels::SCENE_BANK,
    &channels::SCENE,
    &channels::USER_CONTROL_BANK,
    &devices::DEVICE,
    &devices::PRIMARY_DEVICE,
    &devices::CURSOR_DEVICE,
    &browsing::BROWSER,
    &browsing::BROWSING_SESSION,
    &browsing::GENERIC_BROWSING_SESSION,
    &browsing::BROWSING_SESSION_BANK,
    &application::TRANSPORT,
    &application::GROOVE,
    &application::APPLICATION,
    &application::ARRANGER,
    &application::MIXER,
    &application::PROJECT,
    &application::CLIP,
    &remote::REMOTE_SOCKET,
    &remote::REMOTE_CONNECTION,
];

/// Registry holding every class declared by this crate
pub fn registry() -> ClassRegistry {
    let mut registry = ClassRegistry::new();
    for class in CLASSES {
        registry.register(*class);
    }
    registry
}
