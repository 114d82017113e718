//! Splitting a raw model reply into its `<think>` block and visible answer.
//!
//! The model is told to reason inside `<think>...</think>` before answering.
//! The two halves are extracted independently from the same raw text:
//!
//! - `thinking`: body of the first `<think>...</think>` block, trimmed.
//! - `reply`: everything after the last `</think>`, trimmed.
//!
//! Either half may be missing; that is logged at debug level and is not an
//! error. An empty match yields `Some("")`, not `None`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

const THINK_CLOSE: &str = "</think>";

static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>(.*?)</think>").unwrap());

/// The display halves of one raw reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReply {
    pub thinking: Option<String>,
    pub reply: Option<String>,
}

pub fn split_reply(raw: &str) -> SplitReply {
    let thinking = THINK_BLOCK
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string());
    if thinking.is_none() {
        debug!("could not extract thinking text from reply");
    }

    let reply = raw
        .rfind(THINK_CLOSE)
        .map(|idx| raw[idx + THINK_CLOSE.len()..].trim().to_string());
    if reply.is_none() {
        debug!("could not extract actual response text from reply");
    }

    SplitReply { thinking, reply }
}
