//! Observable values

use surface_sdk::{wrapper_class, HostCallback, HostResult, Wrapper, API_PROXY};

wrapper_class! {
    /// Base of every observable value.
    pub struct Value: VALUE extends API_PROXY {}
}

wrapper_class! {
    /// A value that is either on or off.
    pub struct BooleanValue: BOOLEAN_VALUE extends VALUE {}
}

wrapper_class! {
    /// Solo state of a channel.
    pub struct SoloValue: SOLO_VALUE extends BOOLEAN_VALUE {}
}

wrapper_class! {
    /// A numeric value within a range.
    pub struct RangedValue: RANGED_VALUE extends VALUE {}
}

wrapper_class! {
    /// A ranged value that can be automated and mapped to controls.
    pub struct AutomatableRangedValue: AUTOMATABLE_RANGED_VALUE extends RANGED_VALUE {}
}

wrapper_class! {
    /// A value chosen from a fixed set of options.
    pub struct EnumValue: ENUM_VALUE extends VALUE {}
}

wrapper_class! {
    /// A text value.
    pub struct StringValue: STRING_VALUE extends VALUE {}
}

wrapper_class! {
    /// A trigger without a value.
    pub struct Signal: SIGNAL extends API_PROXY {}
}

/// Members shared by every value.
pub trait ValueApi: Wrapper {
    /// Report value changes to `callback`
    fn add_value_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addValueObserver", &[callback.into()])
    }
}

/// Members of boolean values.
pub trait BooleanValueApi: ValueApi {
    /// Set the value
    fn set(&self, value: bool) -> HostResult<()> {
        self.proxy().call_void("set", &[value.into()])
    }

    /// Flip the value
    fn toggle(&self) -> HostResult<()> {
        self.proxy().call_void("toggle", &[])
    }
}

/// Members of ranged values.
///
/// `resolution` is the number of steps the range is divided into.
pub trait RangedValueApi: ValueApi {
    /// Set the value as `value` steps out of `resolution`
    fn set(&self, value: f64, resolution: i64) -> HostResult<()> {
        self.proxy()
            .call_void("set", &[value.into(), resolution.into()])
    }

    /// Move the value by `delta` steps out of `resolution`
    fn inc(&self, delta: f64, resolution: i64) -> HostResult<()> {
        self.proxy()
            .call_void("inc", &[delta.into(), resolution.into()])
    }

    /// Set the unscaled value
    fn set_raw(&self, value: f64) -> HostResult<()> {
        self.proxy().call_void("setRaw", &[value.into()])
    }

    /// Report unscaled value changes to `callback`
    fn add_raw_value_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addRawValueObserver", &[callback.into()])
    }

    /// Report the displayed text, truncated to `max_chars`
    fn add_value_display_observer(
        &self,
        max_chars: i64,
        fallback: &str,
        callback: HostCallback,
    ) -> HostResult<()> {
        self.proxy().call_void(
            "addValueDisplayObserver",
            &[max_chars.into(), fallback.into(), callback.into()],
        )
    }
}

/// Members of automatable ranged values.
pub trait AutomatableRangedValueApi: RangedValueApi {
    /// Reset to the default value
    fn reset(&self) -> HostResult<()> {
        self.proxy().call_void("reset", &[])
    }

    /// Start or end a touch gesture for automation recording
    fn touch(&self, touched: bool) -> HostResult<()> {
        self.proxy().call_void("touch", &[touched.into()])
    }

    /// Show or hide the mapping indication in the host UI
    fn set_indication(&self, shown: bool) -> HostResult<()> {
        self.proxy().call_void("setIndication", &[shown.into()])
    }

    /// Label shown next to the mapping indication
    fn set_label(&self, label: &str) -> HostResult<()> {
        self.proxy().call_void("setLabel", &[label.into()])
    }

    /// Report the parameter name, truncated to `max_chars`
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

impl ValueApi for Value {}

impl ValueApi for BooleanValue {}
impl BooleanValueApi for BooleanValue {}

impl ValueApi for SoloValue {}
impl BooleanValueApi for SoloValue {}

impl ValueApi for RangedValue {}
impl RangedValueApi for RangedValue {}

impl ValueApi for AutomatableRangedValue {}
impl RangedValueApi for AutomatableRangedValue {}
impl AutomatableRangedValueApi for AutomatableRangedValue {}

impl ValueApi for EnumValue {}
impl ValueApi for StringValue {}

impl SoloValue {
    /// Toggle solo; with `exclusive` every other solo is cleared
    pub fn toggle_exclusive(&self, exclusive: bool) -> HostResult<()> {
        self.proxy().call_void("toggle", &[exclusive.into()])
    }
}

impl EnumValue {
    /// Select an option by its id
    pub fn set(&self, option: &str) -> HostResult<()> {
        self.proxy().call_void("set", &[option.into()])
    }
}

impl StringValue {
    /// Replace the text
    pub fn set(&self, text: &str) -> HostResult<()> {
        self.proxy().call_void("set", &[text.into()])
    }
}

impl Signal {
    /// Trigger the signal
    pub fn fire(&self) -> HostResult<()> {
        self.proxy().call_void("fire", &[])
    }

    /// Report triggers to `callback`
    pub fn add_signal_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addSignalObserver", &[callback.into()])
    }
}
