//! Canned conversational replies.
//!
//! An explicit ordered list of (trigger substring, render) pairs. The
//! lower-cased utterance is scanned in table order and the first matching
//! trigger wins, so overlapping triggers ("thank you" before "thanks")
//! resolve deterministically.

type Render = fn(Option<&str>) -> String;

/// Ordered trigger table. Order is part of the contract.
pub const CANNED_REPLIES: &[(&str, Render)] = &[
    ("hi", reply_hi),
    ("hello", reply_hello),
    ("hey", reply_hey),
    ("how are you", reply_how_are_you),
    ("thank you", reply_thank_you),
    ("thanks", reply_thanks),
    ("what can you do", reply_capabilities),
    ("who are you", reply_identity),
];

/// Returned when no trigger matches.
pub const FALLBACK_REPLY: &str = "I'd be happy to help! Try asking a question starting \
     with 'who', 'what', or 'where' and I'll search for current information.";

/// Look up a canned reply for an utterance.
///
/// Scans the trigger table in order against the lower-cased utterance and
/// renders the first match; falls back to [`FALLBACK_REPLY`].
pub fn canned_reply(utterance: &str, user_name: Option<&str>) -> String {
    let lower = utterance.to_lowercase();
    for (trigger, render) in CANNED_REPLIES {
        if lower.contains(trigger) {
            return render(user_name);
        }
    }
    FALLBACK_REPLY.to_string()
}

fn name_suffix(user_name: Option<&str>) -> String {
    user_name.map(|n| format!(" {}", n)).unwrap_or_default()
}

fn reply_hi(user_name: Option<&str>) -> String {
    format!(
        "Hello{}! I'm your assistant with a conversation memory. Ask me anything!",
        name_suffix(user_name)
    )
}

fn reply_hello(user_name: Option<&str>) -> String {
    format!("Hello{}! How can I help you today?", name_suffix(user_name))
}

fn reply_hey(user_name: Option<&str>) -> String {
    format!(
        "Hey{}! Ready to answer your questions!",
        name_suffix(user_name)
    )
}

fn reply_how_are_you(_user_name: Option<&str>) -> String {
    "I'm doing great, thanks for asking! This conversation is being saved.".to_string()
}

fn reply_thank_you(_user_name: Option<&str>) -> String {
    "You're welcome! Happy to help!".to_string()
}

fn reply_thanks(_user_name: Option<&str>) -> String {
    "You're welcome! Let me know if you need anything else!".to_string()
}

fn reply_capabilities(_user_name: Option<&str>) -> String {
    "I can answer questions (who, what, where, when, why, how), search for \
     current information, explain concepts, and remember our conversations. \
     Just ask!"
        .to_string()
}

fn reply_identity(_user_name: Option<&str>) -> String {
    "I'm your assistant, backed by real-time web search and a conversation \
     database. I remember everything we talk about!"
        .to_string()
}
