//! Channels, tracks and their banks
//!
//! `CursorTrack` and `TrackBank` narrow members they inherit: the cursor's
//! primary device is a `PrimaryDevice`, and a track bank's channels are
//! `Track`s. Both are bound again in their own maps and exposed as inherent
//! methods, which take precedence over the inherited trait methods.

use surface_sdk::{wrapper_class, HostCallback, HostResult, Wrapper, API_PROXY};

use crate::devices::{Device, PrimaryDevice, DEVICE, PRIMARY_DEVICE};
use crate::values::{AutomatableRangedValue, BooleanValue, SoloValue};
use crate::values::{AUTOMATABLE_RANGED_VALUE, BOOLEAN_VALUE, SOLO_VALUE};

wrapper_class! {
    /// A mixer channel.
    pub struct Channel: CHANNEL extends API_PROXY {
        "getVolume" => AUTOMATABLE_RANGED_VALUE: Accessor,
        "getPan" => AUTOMATABLE_RANGED_VALUE: Accessor,
        "getSend" => AUTOMATABLE_RANGED_VALUE: Accessor,
        "getMute" => BOOLEAN_VALUE: Accessor,
        "getSolo" => SOLO_VALUE: Accessor,
        "exists" => BOOLEAN_VALUE: Accessor,
    }
}

wrapper_class! {
    /// A channel that holds clips and devices.
    pub struct Track: TRACK extends CHANNEL {
        "getArm" => BOOLEAN_VALUE: Accessor,
        "getPrimaryDevice" => DEVICE: Accessor,
    }
}

wrapper_class! {
    /// The track currently selected in the host, following the selection.
    pub struct CursorTrack: CURSOR_TRACK extends TRACK {
        "getPrimaryDevice" => PRIMARY_DEVICE: Accessor,
    }
}

wrapper_class! {
    /// The master track.
    pub struct MasterTrack: MASTER_TRACK extends TRACK {}
}

wrapper_class! {
    /// A scrollable window of channels.
    pub struct ChannelBank: CHANNEL_BANK extends API_PROXY {
        "getChannel" => CHANNEL: Accessor,
    }
}

wrapper_class! {
    /// A scrollable window of tracks.
    pub struct TrackBank: TRACK_BANK extends CHANNEL_BANK {
        "getChannel" => TRACK: Accessor,
        "getTrack" => TRACK: Accessor,
        "getClipLauncherScenes" => SCENE_BANK: Accessor,
    }
}

wrapper_class! {
    /// A scrollable window of scenes.
    pub struct SceneBank: SCENE_BANK extends API_PROXY {
        "getScene" => SCENE: Accessor,
    }
}

wrapper_class! {
    /// One row of the clip launcher.
    pub struct Scene: SCENE extends API_PROXY {}
}

wrapper_class! {
    /// Freely assignable controls.
    pub struct UserControlBank: USER_CONTROL_BANK extends API_PROXY {
        "getControl" => AUTOMATABLE_RANGED_VALUE: Accessor,
    }
}

/// Members shared by every channel.
pub trait ChannelApi: Wrapper {
    /// Channel volume
    fn volume(&self) -> HostResult<AutomatableRangedValue> {
        self.proxy().call_wrapped("getVolume", &[])
    }

    /// Channel panning
    fn pan(&self) -> HostResult<AutomatableRangedValue> {
        self.proxy().call_wrapped("getPan", &[])
    }

    /// Send level for send slot `index`
    fn send(&self, index: i64) -> HostResult<AutomatableRangedValue> {
        self.proxy().call_wrapped("getSend", &[index.into()])
    }

    /// Mute state
    fn mute(&self) -> HostResult<BooleanValue> {
        self.proxy().call_wrapped("getMute", &[])
    }

    /// Solo state
    fn solo(&self) -> HostResult<SoloValue> {
        self.proxy().call_wrapped("getSolo", &[])
    }

    /// Whether a channel occupies this bank slot
    fn exists(&self) -> HostResult<BooleanValue> {
        self.proxy().call_wrapped("exists", &[])
    }

    /// Show the channel in the editor
    fn select_in_editor(&self) -> HostResult<()> {
        self.proxy().call_void("selectInEditor", &[])
    }

    /// Select the channel in the mixer
    fn select_in_mixer(&self) -> HostResult<()> {
        self.proxy().call_void("selectInMixer", &[])
    }

    /// Report the channel name, truncated to `max_chars`
    fn add_name_observer(
        &self,
        max_chars: i64,
        fallback: &str,
        callback: HostCallback,
    ) -> HostResult<()> {
        self.proxy().call_void(
            "addNameObserver",
            &[max_chars.into(), fallback.into(), callback.into()],
        )
    }

    /// Report meter levels scaled to `range`; `channel` is -1 for the sum
    fn add_vu_meter_observer(
        &self,
        range: i64,
        channel: i64,
        peak: bool,
        callback: HostCallback,
    ) -> HostResult<()> {
        self.proxy().call_void(
            "addVuMeterObserver",
            &[range.into(), channel.into(), peak.into(), callback.into()],
        )
    }
}

/// Members of tracks.
pub trait TrackApi: ChannelApi {
    /// Record arm state
    fn arm(&self) -> HostResult<BooleanValue> {
        self.proxy().call_wrapped("getArm", &[])
    }

    /// First device in the track's chain
    fn primary_device(&self) -> HostResult<Device> {
        self.proxy().call_wrapped("getPrimaryDevice", &[])
    }

    /// Play a note on the track's instrument
    fn start_note(&self, key: i64, velocity: i64) -> HostResult<()> {
        self.proxy()
            .call_void("startNote", &[key.into(), velocity.into()])
    }

    /// Release a note started with `start_note`
    fn stop_note(&self, key: i64, velocity: i64) -> HostResult<()> {
        self.proxy()
            .call_void("stopNote", &[key.into(), velocity.into()])
    }

    /// Leave clip launcher playback and follow the arrangement
    fn return_to_arrangement(&self) -> HostResult<()> {
        self.proxy().call_void("returnToArrangement", &[])
    }
}

/// Members of channel banks.
pub trait ChannelBankApi: Wrapper {
    /// Channel at `index` within the window
    fn channel(&self, index: i64) -> HostResult<Channel> {
        self.proxy().call_wrapped("getChannel", &[index.into()])
    }

    /// Scroll the window one channel up
    fn scroll_channels_up(&self) -> HostResult<()> {
        self.proxy().call_void("scrollChannelsUp", &[])
    }

    /// Scroll the window one channel down
    fn scroll_channels_down(&self) -> HostResult<()> {
        self.proxy().call_void("scrollChannelsDown", &[])
    }

    /// Report the total number of channels
    fn add_channel_count_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addChannelCountObserver", &[callback.into()])
    }
}

impl ChannelApi for Channel {}

impl ChannelApi for Track {}
impl TrackApi for Track {}

impl ChannelApi for CursorTrack {}
impl TrackApi for CursorTrack {}

impl ChannelApi for MasterTrack {}
impl TrackApi for MasterTrack {}

impl ChannelBankApi for ChannelBank {}
impl ChannelBankApi for TrackBank {}

impl CursorTrack {
    /// First device in the selected track's chain
    pub fn primary_device(&self) -> HostResult<PrimaryDevice> {
        self.proxy().call_wrapped("getPrimaryDevice", &[])
    }

    /// Move the cursor to the previous track
    pub fn select_previous(&self) -> HostResult<()> {
        self.proxy().call_void("selectPrevious", &[])
    }

    /// Move the cursor to the next track
    pub fn select_next(&self) -> HostResult<()> {
        self.proxy().call_void("selectNext", &[])
    }
}

impl TrackBank {
    /// Track at `index` within the window
    pub fn channel(&self, index: i64) -> HostResult<Track> {
        self.proxy().call_wrapped("getChannel", &[index.into()])
    }

    /// Track at `index` within the window
    pub fn track(&self, index: i64) -> HostResult<Track> {
        self.proxy().call_wrapped("getTrack", &[index.into()])
    }

    /// Scenes of the tracks in this bank
    pub fn clip_launcher_scenes(&self) -> HostResult<SceneBank> {
        self.proxy().call_wrapped("getClipLauncherScenes", &[])
    }

    /// Scroll the window one track up
    pub fn scroll_tracks_up(&self) -> HostResult<()> {
        self.proxy().call_void("scrollTracksUp", &[])
    }

    /// Scroll the window one track down
    pub fn scroll_tracks_down(&self) -> HostResult<()> {
        self.proxy().call_void("scrollTracksDown", &[])
    }
}

impl SceneBank {
    /// Scene at `index` within the window
    pub fn scene(&self, index: i64) -> HostResult<Scene> {
        self.proxy().call_wrapped("getScene", &[index.into()])
    }

    /// Scroll one scene up
    pub fn scroll_up(&self) -> HostResult<()> {
        self.proxy().call_void("scrollUp", &[])
    }

    /// Scroll one scene down
    pub fn scroll_down(&self) -> HostResult<()> {
        self.proxy().call_void("scrollDown", &[])
    }

    /// Launch the scene at `index`
    pub fn launch_scene(&self, index: i64) -> HostResult<()> {
        self.proxy().call_void("launchScene", &[index.into()])
    }
}

impl Scene {
    /// Launch every clip in the scene
    pub fn launch(&self) -> HostResult<()> {
        self.proxy().call_void("launch", &[])
    }

    /// Report the scene name, truncated to `max_chars`
    pub fn add_name_observer(
        &self,
        max_chars: i64,
        fallback: &str,
        callback: HostCallback,
    ) -> HostResult<()> {
        self.proxy().call_void(
            "addNameObserver",
            &[max_chars.into(), fallback.into(), callback.into()],
        )
    }
}

impl UserControlBank {
    /// Control at `index`
    pub fn control(&self, index: i64) -> HostResult<AutomatableRangedValue> {
        self.proxy().call_wrapped("getControl", &[index.into()])
    }
}
