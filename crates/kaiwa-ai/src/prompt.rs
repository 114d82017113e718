//! Prompt assembly.

use crate::Message;

/// `[system] + history + [user]`. The system turn is never part of
/// `history`; it is added here, once, at call time.
pub fn build_prompt(system_prompt: &str, history: &[Message], message: &str) -> Vec<Message> {
    let mut msgs = Vec::with_capacity(history.len() + 2);
    msgs.push(Message::system(system_prompt));
    msgs.extend(history.iter().cloned());
    msgs.push(Message::user(message));
    msgs
}
