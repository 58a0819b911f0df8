// State Machine States, Actions, and Transitions

/// The current state when recognizing an escape sequence.
///
/// The ground state is implicit: The scanner only runs the state machine
/// after encountering an ESC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum State {
    Escape,
    CsiEntry,
    CsiParam,
    CsiIntermediate,
    StringBody,
    StringEnd,
}

/// The next action to take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Action {
    /// Retain the current byte as part of the escape sequence.
    RetainByte,
    /// Retain the current byte and complete the escape sequence.
    Dispatch,
    /// Abandon the escape sequence. The ESC that started it is plain text.
    AbortSequence,
}

// ------------------------------------------------------------------------------------------------
// Escape

const fn escape(byte: u8) -> (State, Action) {
    use self::Action::*;
    use self::State::*;

    match byte {
        0x5b => (CsiEntry, RetainByte),
        0x5d => (StringBody, RetainByte),
        _ => (Escape, AbortSequence),
    }
}

// ------------------------------------------------------------------------------------------------
// CSI

const fn csi_entry(byte: u8) -> (State, Action) {
    use self::Action::*;
    use self::State::*;

    match byte {
        0x20..=0x2f => (CsiIntermediate, RetainByte),
        0x30..=0x3f => (CsiParam, RetainByte),
        0x40..=0x7e => (CsiEntry, Dispatch),
        _ => (CsiEntry, AbortSequence),
    }
}

const fn csi_param(byte: u8) -> (State, Action) {
    use self::Action::*;
    use self::State::*;

    match byte {
        0x20..=0x2f => (CsiIntermediate, RetainByte),
        0x30..=0x3f => (CsiParam, RetainByte),
        0x40..=0x7e => (CsiParam, Dispatch),
        _ => (CsiParam, AbortSequence),
    }
}

const fn csi_intermediate(byte: u8) -> (State, Action) {
    use self::Action::*;
    use self::State::*;

    match byte {
        0x20..=0x2f => (CsiIntermediate, RetainByte),
        0x40..=0x7e => (CsiIntermediate, Dispatch),
        _ => (CsiIntermediate, AbortSequence),
    }
}

// ------------------------------------------------------------------------------------------------
// OSC

const fn string_body(byte: u8) -> (State, Action) {
    use self::Action::*;
    use self::State::*;

    match byte {
        0x07 => (StringBody, Dispatch),
        0x1b => (StringEnd, RetainByte),
        0x00..=0x1f => (StringBody, AbortSequence),
        // Printable ASCII as well as UTF-8 lead and continuation bytes.
        _ => (StringBody, RetainByte),
    }
}

const fn string_end(byte: u8) -> (State, Action) {
    use self::Action::*;
    use self::State::*;

    match byte {
        0x5c => (StringEnd, Dispatch),
        _ => (StringEnd, AbortSequence),
    }
}

// ------------------------------------------------------------------------------------------------
// Complete transition function

/// Determine the next state and action.
pub(super) const fn transition(state: State, byte: u8) -> (State, Action) {
    use self::State::*;

    match state {
        Escape => escape(byte),
        CsiEntry => csi_entry(byte),
        CsiParam => csi_param(byte),
        CsiIntermediate => csi_intermediate(byte),
        StringBody => string_body(byte),
        StringEnd => string_end(byte),
    }
}

#[cfg(test)]
mod test {
    use super::{transition, Action, State};

    #[test]
    fn test_transitions() {
        assert_eq!(
            transition(State::Escape, b'['),
            (State::CsiEntry, Action::RetainByte)
        );
        assert_eq!(
            transition(State::Escape, b'('),
            (State::Escape, Action::AbortSequence)
        );
        assert_eq!(
            transition(State::CsiParam, b';'),
            (State::CsiParam, Action::RetainByte)
        );
        assert_eq!(
            transition(State::CsiParam, b'm'),
            (State::CsiParam, Action::Dispatch)
        );
        assert_eq!(
            transition(State::CsiIntermediate, b'1'),
            (State::CsiIntermediate, Action::AbortSequence)
        );
        assert_eq!(
            transition(State::StringBody, b'\n'),
            (State::StringBody, Action::AbortSequence)
        );
        assert_eq!(
            transition(State::StringEnd, b'\\'),
            (State::StringEnd, Action::Dispatch)
        );
    }
}
