//! Preferences, document settings and notification switches

use surface_sdk::{wrapper_class, HostResult, Wrapper, API_PROXY};

use crate::values::{BooleanValue, EnumValue, RangedValue, Signal, StringValue};
use crate::values::{BOOLEAN_VALUE, ENUM_VALUE, RANGED_VALUE, SIGNAL, STRING_VALUE};

wrapper_class! {
    /// A set of user-editable settings.
    ///
    /// Every `get*Setting` call creates a new setting in the host, so all of
    /// them are factories despite their names.
    pub struct Settings: SETTINGS extends API_PROXY {
        "getSignalSetting" => SIGNAL: Factory,
        "getNumberSetting" => RANGED_VALUE: Factory,
        "getEnumSetting" => ENUM_VALUE: Factory,
        "getStringSetting" => STRING_VALUE: Factory,
    }
}

wrapper_class! {
    /// Settings stored with the controller preferences.
    pub struct Preferences: PREFERENCES extends SETTINGS {}
}

wrapper_class! {
    /// Settings stored with the current document.
    pub struct DocumentState: DOCUMENT_STATE extends SETTINGS {}
}

wrapper_class! {
    /// Switches for the popup notifications a controller triggers.
    pub struct NotificationSettings: NOTIFICATION_SETTINGS extends API_PROXY {
        "getUserNotificationsEnabled" => BOOLEAN_VALUE: Accessor,
    }
}

/// Members of settings containers.
pub trait SettingsApi: Wrapper {
    /// Add a button setting
    fn signal_setting(&self, label: &str, category: &str, action: &str) -> HostResult<Signal> {
        self.proxy().call_wrapped(
            "getSignalSetting",
            &[label.into(), category.into(), action.into()],
        )
    }

    /// Add a numeric setting
    #[allow(clippy::too_many_arguments)]
    fn number_setting(
        &self,
        label: &str,
        category: &str,
        min: f64,
        max: f64,
        step: f64,
        unit: &str,
        initial: f64,
    ) -> HostResult<RangedValue> {
        self.proxy().call_wrapped(
            "getNumberSetting",
            &[
                label.into(),
                category.into(),
                min.into(),
                max.into(),
                step.into(),
                unit.into(),
                initial.into(),
            ],
        )
    }

    /// Add a choice setting
    fn enum_setting(
        &self,
        label: &str,
        category: &str,
        options: &[&str],
        initial: &str,
    ) -> HostResult<EnumValue> {
        self.proxy().call_wrapped(
            "getEnumSetting",
            &[label.into(), category.into(), options.to_vec().into(), initial.into()],
        )
    }

    /// Add a text setting limited to `max_chars`
    fn string_setting(
        &self,
        label: &str,
        category: &str,
        max_chars: i64,
        initial: &str,
    ) -> HostResult<StringValue> {
        self.proxy().call_wrapped(
            "getStringSetting",
            &[label.into(), category.into(), max_chars.into(), initial.into()],
        )
    }
}

impl SettingsApi for Settings {}
impl SettingsApi for Preferences {}
impl SettingsApi for DocumentState {}

impl NotificationSettings {
    /// Whether user notifications are enabled at all
    pub fn user_notifications_enabled(&self) -> HostResult<BooleanValue> {
        self.proxy()
            .call_wrapped("getUserNotificationsEnabled", &[])
    }

    /// Notify on selection changes
    pub fn set_should_show_selection_notifications(&self, show: bool) -> HostResult<()> {
        self.proxy()
            .call_void("setShouldShowSelectionNotifications", &[show.into()])
    }

    /// Notify on channel selection changes
    pub fn set_should_show_channel_selection_notifications(&self, show: bool) -> HostResult<()> {
        self.proxy()
            .call_void("setShouldShowChannelSelectionNotifications", &[show.into()])
    }

    /// Notify on track selection changes
    pub fn set_should_show_track_selection_notifications(&self, show: bool) -> HostResult<()> {
        self.proxy()
            .call_void("setShouldShowTrackSelectionNotifications", &[show.into()])
    }

    /// Notify on device selection changes
    pub fn set_should_show_controller_selection_notifications(
        &self,
        show: bool,
    ) -> HostResult<()> {
        self.proxy().call_void(
            "setShouldShowControllerSelectionNotifications",
            &[show.into()],
        )
    }

    /// Notify on device layer selection changes
    pub fn set_should_show_controller_layer_selection_notifications(
        &self,
        show: bool,
    ) -> HostResult<()> {
        self.proxy().call_void(
            "setShouldShowControllerLayerSelectionNotifications",
            &[show.into()],
        )
    }

    /// Notify on preset changes
    pub fn set_should_show_preset_notifications(&self, show: bool) -> HostResult<()> {
        self.proxy()
            .call_void("setShouldShowPresetNotifications", &[show.into()])
    }

    /// Notify on mapping changes
    pub fn set_should_show_mapping_notifications(&self, show: bool) -> HostResult<()> {
        self.proxy()
            .call_void("setShouldShowMappingNotifications", &[show.into()])
    }

    /// Notify on value changes
    pub fn set_should_show_value_notifications(&self, show: bool) -> HostResult<()> {
        self.proxy()
            .call_void("setShouldShowValueNotifications", &[show.into()])
    }
}
