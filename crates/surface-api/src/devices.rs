//! Devices in a track's chain

use surface_sdk::{wrapper_class, HostCallback, HostResult, Wrapper, API_PROXY};

use crate::browsing::{Browser, BROWSER};
use crate::channels::{Channel, CHANNEL};
use crate::values::{AutomatableRangedValue, BooleanValue};
use crate::values::{AUTOMATABLE_RANGED_VALUE, BOOLEAN_VALUE};

wrapper_class! {
    /// An instrument or effect.
    pub struct Device: DEVICE extends API_PROXY {
        "getParameter" => AUTOMATABLE_RANGED_VALUE: Accessor,
        "getCommonParameter" => AUTOMATABLE_RANGED_VALUE: Accessor,
        "getEnvelopeParameter" => AUTOMATABLE_RANGED_VALUE: Accessor,
        "isEnabled" => BOOLEAN_VALUE: Accessor,
    }
}

wrapper_class! {
    /// The first device of a track, which can be swapped for another one.
    pub struct PrimaryDevice: PRIMARY_DEVICE extends DEVICE {}
}

wrapper_class! {
    /// A device cursor that follows the selection in the editor.
    pub struct CursorDevice: CURSOR_DEVICE extends DEVICE {
        "getChannel" => CHANNEL: Accessor,
        "createDeviceBrowser" => BROWSER: Factory,
    }
}

/// Members shared by every device.
pub trait DeviceApi: Wrapper {
    /// Parameter `index` of the current parameter page
    fn parameter(&self, index: i64) -> HostResult<AutomatableRangedValue> {
        self.proxy().call_wrapped("getParameter", &[index.into()])
    }

    /// Common parameter `index`
    fn common_parameter(&self, index: i64) -> HostResult<AutomatableRangedValue> {
        self.proxy()
            .call_wrapped("getCommonParameter", &[index.into()])
    }

    /// Envelope parameter `index`
    fn envelope_parameter(&self, index: i64) -> HostResult<AutomatableRangedValue> {
        self.proxy()
            .call_wrapped("getEnvelopeParameter", &[index.into()])
    }

    /// Enabled state
    fn is_enabled(&self) -> HostResult<BooleanValue> {
        self.proxy().call_wrapped("isEnabled", &[])
    }

    /// Flip the enabled state
    fn toggle_enabled_state(&self) -> HostResult<()> {
        self.proxy().call_void("toggleEnabledState", &[])
    }

    /// Show the next parameter page
    fn next_parameter_page(&self) -> HostResult<()> {
        self.proxy().call_void("nextParameterPage", &[])
    }

    /// Show the previous parameter page
    fn previous_parameter_page(&self) -> HostResult<()> {
        self.proxy().call_void("previousParameterPage", &[])
    }

    /// Report the device name, truncated to `max_chars`
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
}

impl DeviceApi for Device {}
impl DeviceApi for PrimaryDevice {}
impl DeviceApi for CursorDevice {}

impl PrimaryDevice {
    /// Replace the device with the first device of `device_type`
    /// (`"instrument"`, `"audio_effect"`, ...) found at `location`
    pub fn switch_to_device(&self, device_type: &str, location: &str) -> HostResult<()> {
        self.proxy()
            .call_void("switchToDevice", &[device_type.into(), location.into()])
    }

    /// Report whether `switch_to_device` would succeed for these arguments
    pub fn add_can_switch_to_device_observer(
        &self,
        device_type: &str,
        location: &str,
        callback: HostCallback,
    ) -> HostResult<()> {
        self.proxy().call_void(
            "addCanSwitchToDeviceObserver",
            &[device_type.into(), location.into(), callback.into()],
        )
    }
}

impl CursorDevice {
    /// Channel that contains the selected device
    pub fn channel(&self) -> HostResult<Channel> {
        self.proxy().call_wrapped("getChannel", &[])
    }

    /// Select the next device in the chain
    pub fn select_next(&self) -> HostResult<()> {
        self.proxy().call_void("selectNext", &[])
    }

    /// Select the previous device in the chain
    pub fn select_previous(&self) -> HostResult<()> {
        self.proxy().call_void("selectPrevious", &[])
    }

    /// Open a browser for replacing or inserting devices
    pub fn create_device_browser(
        &self,
        filter_columns: i64,
        result_columns: i64,
    ) -> HostResult<Browser> {
        self.proxy().call_wrapped(
            "createDeviceBrowser",
            &[filter_columns.into(), result_columns.into()],
        )
    }
}
