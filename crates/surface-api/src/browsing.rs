//! The contextual browser and its sessions

use surface_sdk::{wrapper_class, HostCallback, HostResult, Wrapper, API_PROXY};

wrapper_class! {
    /// The contextual browser.
    pub struct Browser: BROWSER extends API_PROXY {
        "createSessionBank" => BROWSING_SESSION_BANK: Factory,
    }
}

wrapper_class! {
    /// One tab of the browser.
    pub struct BrowsingSession: BROWSING_SESSION extends API_PROXY {}
}

wrapper_class! {
    /// A session of any content type.
    pub struct GenericBrowsingSession: GENERIC_BROWSING_SESSION extends BROWSING_SESSION {}
}

wrapper_class! {
    /// A scrollable window over the browser's sessions.
    pub struct BrowsingSessionBank: BROWSING_SESSION_BANK extends API_PROXY {
        "getSession" => GENERIC_BROWSING_SESSION: Accessor,
    }
}

impl Browser {
    /// Window of `size` sessions
    pub fn create_session_bank(&self, size: i64) -> HostResult<BrowsingSessionBank> {
        self.proxy()
            .call_wrapped("createSessionBank", &[size.into()])
    }

    /// Open the browser
    pub fn start_browsing(&self) -> HostResult<()> {
        self.proxy().call_void("startBrowsing", &[])
    }

    /// Close the browser without applying a result
    pub fn cancel_browsing(&self) -> HostResult<()> {
        self.proxy().call_void("cancelBrowsing", &[])
    }

    /// Apply the selected result and close the browser
    pub fn commit_selected_result(&self) -> HostResult<()> {
        self.proxy().call_void("commitSelectedResult", &[])
    }

    /// Report whether the browser is open
    pub fn add_is_browsing_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addIsBrowsingObserver", &[callback.into()])
    }
}

/// Members shared by every browsing session.
pub trait BrowsingSessionApi: Wrapper {
    /// Make this the active tab
    fn activate(&self) -> HostResult<()> {
        self.proxy().call_void("activate", &[])
    }

    /// Report whether the session applies to the current context
    fn add_is_available_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addIsAvailableObserver", &[callback.into()])
    }

    /// Report whether the session is the active tab
    fn add_is_active_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addIsActiveObserver", &[callback.into()])
    }

    /// Report the session name, truncated to `max_chars`
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

impl BrowsingSessionApi for BrowsingSession {}
impl BrowsingSessionApi for GenericBrowsingSession {}

impl BrowsingSessionBank {
    /// Window size the bank was created with
    pub fn size(&self) -> HostResult<i64> {
        self.proxy().call_as("getSize", &[])
    }

    /// Session at `index`, which must be below `size()`
    pub fn session(&self, index: i64) -> HostResult<GenericBrowsingSession> {
        self.proxy().call_wrapped("getSession", &[index.into()])
    }

    /// Scroll one session up
    pub fn scroll_up(&self) -> HostResult<()> {
        self.proxy().call_void("scrollUp", &[])
    }

    /// Scroll one session down
    pub fn scroll_down(&self) -> HostResult<()> {
        self.proxy().call_void("scrollDown", &[])
    }

    /// Scroll one window up
    pub fn scroll_page_up(&self) -> HostResult<()> {
        self.proxy().call_void("scrollPageUp", &[])
    }

    /// Scroll one window down
    pub fn scroll_page_down(&self) -> HostResult<()> {
        self.proxy().call_void("scrollPageDown", &[])
    }

    /// Report the index of the first visible session, or -1 when empty
    pub fn add_scroll_position_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addScrollPositionObserver", &[callback.into()])
    }

    /// Report whether the window can scroll up
    pub fn add_can_scroll_up_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addCanScrollUpObserver", &[callback.into()])
    }

    /// Report whether the window can scroll down
    pub fn add_can_scroll_down_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addCanScrollDownObserver", &[callback.into()])
    }

    /// Report the total number of sessions
    pub fn add_entry_count_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addEntryCountObserver", &[callback.into()])
    }
}
