//! MIDI ports and note inputs

use surface_sdk::{wrapper_class, HostCallback, HostResult, HostValue, Wrapper, API_PROXY};

wrapper_class! {
    /// A MIDI input port of the controller.
    pub struct MidiIn: MIDI_IN extends API_PROXY {
        "createNoteInput" => NOTE_INPUT: Factory,
    }
}

wrapper_class! {
    /// A MIDI output port of the controller.
    pub struct MidiOut: MIDI_OUT extends API_PROXY {}
}

wrapper_class! {
    /// Routes incoming notes to the host's instruments.
    pub struct NoteInput: NOTE_INPUT extends API_PROXY {}
}

impl MidiIn {
    /// Receive short MIDI messages as `(status, data1, data2)`
    pub fn set_midi_callback(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("setMidiCallback", &[callback.into()])
    }

    /// Receive system exclusive messages as hex strings
    pub fn set_sysex_callback(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("setSysexCallback", &[callback.into()])
    }

    /// Create a note input named `name` that forwards messages matching
    /// any of `masks` (hex patterns such as `"80????"`)
    pub fn create_note_input(&self, name: &str, masks: &[&str]) -> HostResult<NoteInput> {
        let args: Vec<HostValue> = std::iter::once(name.into())
            .chain(masks.iter().map(|m| HostValue::from(*m)))
            .collect();
        self.proxy().call_wrapped("createNoteInput", &args)
    }
}

impl MidiOut {
    /// Send a short MIDI message
    pub fn send_midi(&self, status: i64, data1: i64, data2: i64) -> HostResult<()> {
        self.proxy()
            .call_void("sendMidi", &[status.into(), data1.into(), data2.into()])
    }

    /// Send a system exclusive message given as a hex string
    pub fn send_sysex(&self, data: &str) -> HostResult<()> {
        self.proxy().call_void("sendSysex", &[data.into()])
    }

    /// Enable or disable MIDI beat clock output
    pub fn set_should_send_midi_beat_clock(&self, enabled: bool) -> HostResult<()> {
        self.proxy()
            .call_void("setShouldSendMidiBeatClock", &[enabled.into()])
    }
}

impl NoteInput {
    /// Whether matched events are swallowed instead of also reaching the script
    pub fn set_should_consume_events(&self, consume: bool) -> HostResult<()> {
        self.proxy()
            .call_void("setShouldConsumeEvents", &[consume.into()])
    }

    /// Remap incoming keys; `table` has 128 entries, `-1` drops the key
    pub fn set_key_translation_table(&self, table: &[i64]) -> HostResult<()> {
        self.proxy()
            .call_void("setKeyTranslationTable", &[table.to_vec().into()])
    }

    /// Remap incoming velocities; `table` has 128 entries
    pub fn set_velocity_translation_table(&self, table: &[i64]) -> HostResult<()> {
        self.proxy()
            .call_void("setVelocityTranslationTable", &[table.to_vec().into()])
    }
}
