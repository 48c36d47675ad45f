//! Explicit session state for the record → transcribe → reply flow
//!
//! Instead of implicit process-wide UI state (a recording flag and a last
//! transcript), the session is a value object transformed by a pure
//! transition function. The caller performs the returned action and owns
//! persistence and display.

/// Value snapshot of one user session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    /// Capture in progress
    pub recording: bool,
    /// Last transcript, if any
    pub transcript: Option<String>,
    /// Last generated reply, if any
    pub reply: Option<String>,
}

/// Inputs from the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Start/stop button pressed
    Toggle,
    /// Transcription finished
    Transcript(String),
    /// Responder produced a reply
    Reply(String),
    /// Save button pressed
    Save,
}

/// Side effects the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    StartCapture,
    StopCapture,
    /// Persist the literal transcript (not the reply)
    Persist(String),
}

/// Pure transition: the same state and event always yield the same
/// next state and action.
pub fn transition(
    state: &SessionState,
    event: SessionEvent,
) -> (SessionState, Option<SessionAction>) {
    let mut next = state.clone();

    match event {
        SessionEvent::Toggle => {
            if state.recording {
                next.recording = false;
                (next, Some(SessionAction::StopCapture))
            } else {
                next.recording = true;
                // A fresh take invalidates the previous exchange
                next.transcript = None;
                next.reply = None;
                (next, Some(SessionAction::StartCapture))
            }
        }
        SessionEvent::Transcript(text) => {
            next.transcript = Some(text);
            (next, None)
        }
        SessionEvent::Reply(text) => {
            next.reply = Some(text);
            (next, None)
        }
        SessionEvent::Save => {
            let action = state.transcript.clone().map(SessionAction::Persist);
            (next, action)
        }
    }
}
