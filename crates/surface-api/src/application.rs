//! Transport, project and application-level panels

use surface_sdk::{wrapper_class, HostCallback, HostResult, Wrapper, API_PROXY};

use crate::channels::{Track, TRACK};
use crate::values::{BooleanValue, RangedValue, BOOLEAN_VALUE, RANGED_VALUE};

wrapper_class! {
    /// Playback and recording controls.
    pub struct Transport: TRANSPORT extends API_PROXY {
        "getTempo" => RANGED_VALUE: Accessor,
        "isMetronomeEnabled" => BOOLEAN_VALUE: Accessor,
    }
}

wrapper_class! {
    /// Global groove settings.
    pub struct Groove: GROOVE extends API_PROXY {
        "getEnabled" => RANGED_VALUE: Accessor,
        "getShuffleAmount" => RANGED_VALUE: Accessor,
        "getAccentAmount" => RANGED_VALUE: Accessor,
    }
}

wrapper_class! {
    /// The application window and audio engine.
    pub struct Application: APPLICATION extends API_PROXY {}
}

wrapper_class! {
    /// The arrangement panel.
    pub struct Arranger: ARRANGER extends API_PROXY {
        "isPlaybackFollowEnabled" => BOOLEAN_VALUE: Accessor,
        "isClipLauncherVisible" => BOOLEAN_VALUE: Accessor,
    }
}

wrapper_class! {
    /// The mixer panel.
    pub struct Mixer: MIXER extends API_PROXY {
        "isMeterSectionVisible" => BOOLEAN_VALUE: Accessor,
        "isIoSectionVisible" => BOOLEAN_VALUE: Accessor,
    }
}

wrapper_class! {
    /// The open project.
    pub struct Project: PROJECT extends API_PROXY {
        "getRootTrackGroup" => TRACK: Accessor,
        "getShownTopLevelTrackGroup" => TRACK: Accessor,
    }
}

wrapper_class! {
    /// A note clip with a step grid.
    pub struct Clip: CLIP extends API_PROXY {
        "getShuffle" => BOOLEAN_VALUE: Accessor,
        "getAccent" => RANGED_VALUE: Accessor,
    }
}

impl Transport {
    /// Start playback
    pub fn play(&self) -> HostResult<()> {
        self.proxy().call_void("play", &[])
    }

    /// Stop playback
    pub fn stop(&self) -> HostResult<()> {
        self.proxy().call_void("stop", &[])
    }

    /// Restart from the play start position
    pub fn restart(&self) -> HostResult<()> {
        self.proxy().call_void("restart", &[])
    }

    /// Toggle recording
    pub fn record(&self) -> HostResult<()> {
        self.proxy().call_void("record", &[])
    }

    /// Toggle between play and stop
    pub fn toggle_play(&self) -> HostResult<()> {
        self.proxy().call_void("togglePlay", &[])
    }

    /// Project tempo
    pub fn tempo(&self) -> HostResult<RangedValue> {
        self.proxy().call_wrapped("getTempo", &[])
    }

    /// Metronome on/off
    pub fn is_metronome_enabled(&self) -> HostResult<BooleanValue> {
        self.proxy().call_wrapped("isMetronomeEnabled", &[])
    }

    /// Report play state changes
    pub fn add_is_playing_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addIsPlayingObserver", &[callback.into()])
    }
}

impl Groove {
    /// Groove on/off, as a two-step range
    pub fn enabled(&self) -> HostResult<RangedValue> {
        self.proxy().call_wrapped("getEnabled", &[])
    }

    /// Shuffle amount
    pub fn shuffle_amount(&self) -> HostResult<RangedValue> {
        self.proxy().call_wrapped("getShuffleAmount", &[])
    }

    /// Accent amount
    pub fn accent_amount(&self) -> HostResult<RangedValue> {
        self.proxy().call_wrapped("getAccentAmount", &[])
    }
}

impl Application {
    /// Start the audio engine for the current project
    pub fn activate_engine(&self) -> HostResult<()> {
        self.proxy().call_void("activateEngine", &[])
    }

    /// Stop the audio engine
    pub fn deactivate_engine(&self) -> HostResult<()> {
        self.proxy().call_void("deactivateEngine", &[])
    }

    /// Undo the last edit
    pub fn undo(&self) -> HostResult<()> {
        self.proxy().call_void("undo", &[])
    }

    /// Redo the last undone edit
    pub fn redo(&self) -> HostResult<()> {
        self.proxy().call_void("redo", &[])
    }

    /// Report whether the audio engine is running
    pub fn add_has_active_engine_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addHasActiveEngineObserver", &[callback.into()])
    }
}

impl Arranger {
    /// Whether the view follows the play position
    pub fn is_playback_follow_enabled(&self) -> HostResult<BooleanValue> {
        self.proxy().call_wrapped("isPlaybackFollowEnabled", &[])
    }

    /// Whether the clip launcher is shown next to the arrangement
    pub fn is_clip_launcher_visible(&self) -> HostResult<BooleanValue> {
        self.proxy().call_wrapped("isClipLauncherVisible", &[])
    }
}

impl Mixer {
    /// Whether meters are shown
    pub fn is_meter_section_visible(&self) -> HostResult<BooleanValue> {
        self.proxy().call_wrapped("isMeterSectionVisible", &[])
    }

    /// Whether the I/O section is shown
    pub fn is_io_section_visible(&self) -> HostResult<BooleanValue> {
        self.proxy().call_wrapped("isIoSectionVisible", &[])
    }
}

impl Project {
    /// Group containing every top-level track
    pub fn root_track_group(&self) -> HostResult<Track> {
        self.proxy().call_wrapped("getRootTrackGroup", &[])
    }

    /// Group whose tracks are currently shown at the top level
    pub fn shown_top_level_track_group(&self) -> HostResult<Track> {
        self.proxy()
            .call_wrapped("getShownTopLevelTrackGroup", &[])
    }

    /// Switch to the previous open project
    pub fn previous_project(&self) -> HostResult<()> {
        self.proxy().call_void("previousProject", &[])
    }

    /// Switch to the next open project
    pub fn next_project(&self) -> HostResult<()> {
        self.proxy().call_void("nextProject", &[])
    }
}

impl Clip {
    /// Set the step at column `x`, key row `y`
    pub fn set_step(&self, x: i64, y: i64, velocity: i64, duration: f64) -> HostResult<()> {
        self.proxy().call_void(
            "setStep",
            &[x.into(), y.into(), velocity.into(), duration.into()],
        )
    }

    /// Remove every note
    pub fn clear_steps(&self) -> HostResult<()> {
        self.proxy().call_void("clearSteps", &[])
    }

    /// Scroll the grid so that `key` is the lowest row
    pub fn scroll_to_key(&self, key: i64) -> HostResult<()> {
        self.proxy().call_void("scrollToKey", &[key.into()])
    }

    /// Scroll the grid so that `step` is the first column
    pub fn scroll_to_step(&self, step: i64) -> HostResult<()> {
        self.proxy().call_void("scrollToStep", &[step.into()])
    }

    /// Whether shuffle applies to the clip
    pub fn shuffle(&self) -> HostResult<BooleanValue> {
        self.proxy().call_wrapped("getShuffle", &[])
    }

    /// Accent amount of the clip
    pub fn accent(&self) -> HostResult<RangedValue> {
        self.proxy().call_wrapped("getAccent", &[])
    }

    /// Report step contents as `(x, y, state)`
    pub fn add_step_data_observer(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("addStepDataObserver", &[callback.into()])
    }
}
