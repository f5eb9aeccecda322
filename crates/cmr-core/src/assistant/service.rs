//! Scripted assistant transcript and reply engine.
//!
//! There is no model behind this: replies are canned responses picked
//! by lowercase keyword matching, with an echo fallback. The simulated
//! thinking delay is applied by the command layer, not here, so the
//! engine itself stays synchronous and testable.

use std::time::Duration;

use super::model::{ChatMessage, ChatRole};

/// Fixed delay modeling the assistant round-trip.
pub const REPLY_DELAY: Duration = Duration::from_secs(1);

/// Quick prompts offered above the input box.
pub const PREDEFINED_PROMPTS: [&str; 5] = [
    "Help me categorize these tax documents",
    "Explain the difference between Schedule C and Schedule E",
    "What's the deadline for filing 1099 forms?",
    "How can I optimize tax deductions for my client?",
    "Generate a monthly financial report template",
];

const WELCOME: &str = "Hello! I'm your accounting assistant. How can I help you today \
     with tax filing, bookkeeping, or client management?";

const CLEARED: &str = "Chat cleared. How else can I assist you today?";

/// Picks the canned reply for a user message.
fn scripted_reply(input: &str) -> String {
    let lower = input.to_lowercase();

    if lower.contains("tax") && lower.contains("deadline") {
        "For most individual tax returns, the deadline is April 15th. However, if this \
         falls on a weekend or holiday, it may be extended to the next business day. For \
         businesses, deadlines vary based on the business structure and fiscal year."
            .to_string()
    } else if lower.contains("quickbooks") || lower.contains("integration") {
        "Our system integrates seamlessly with QuickBooks. You can synchronize client \
         data, financial records, and tax documents through the Integrations panel. \
         Would you like me to guide you through the setup process?"
            .to_string()
    } else if lower.contains("categorize") || lower.contains("organize") {
        "To categorize documents, I recommend using our file tagging system. You can \
         bulk select files and apply tags like 'Tax Return', 'Receipt', or 'Financial \
         Statement'. This will make them easier to search and filter later."
            .to_string()
    } else if lower.contains("report") || lower.contains("financial statement") {
        "I can help generate financial reports. We have templates for balance sheets, \
         income statements, cash flow statements, and tax summaries. Would you like me \
         to prepare a specific type of report?"
            .to_string()
    } else {
        format!(
            "I understand you're asking about \"{}\". To provide you with the most \
             accurate information, could you provide more details about your specific \
             accounting or tax question?",
            input
        )
    }
}

/// Holds the chat transcript and appends scripted replies.
pub struct Assistant {
    messages: Vec<ChatMessage>,
}

impl Assistant {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatRole::Assistant, WELCOME)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends the user message and its scripted reply.
    ///
    /// Blank input is ignored and returns `None`; otherwise the reply
    /// message is returned.
    pub fn send(&mut self, input: &str) -> Option<ChatMessage> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::new(ChatRole::User, input));
        let reply = ChatMessage::new(ChatRole::Assistant, scripted_reply(input));
        self.messages.push(reply.clone());
        Some(reply)
    }

    /// Resets the transcript to the post-clear greeting.
    pub fn clear(&mut self) {
        self.messages = vec![ChatMessage::new(ChatRole::Assistant, CLEARED)];
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_welcome() {
        let assistant = Assistant::new();
        assert_eq!(assistant.messages().len(), 1);
        assert_eq!(assistant.messages()[0].role, ChatRole::Assistant);
        assert!(assistant.messages()[0].content.starts_with("Hello!"));
    }

    #[test]
    fn test_tax_deadline_reply() {
        let mut assistant = Assistant::new();
        let reply = assistant
            .send("What is the TAX filing deadline this year?")
            .unwrap();
        assert!(reply.content.contains("April 15th"));
    }

    #[test]
    fn test_quickbooks_reply() {
        let mut assistant = Assistant::new();
        let reply = assistant.send("How do I set up QuickBooks?").unwrap();
        assert!(reply.content.contains("Integrations panel"));
    }

    #[test]
    fn test_categorize_reply() {
        let mut assistant = Assistant::new();
        let reply = assistant
            .send("Help me categorize these tax documents")
            .unwrap();
        assert!(reply.content.contains("file tagging system"));
    }

    #[test]
    fn test_report_reply() {
        let mut assistant = Assistant::new();
        let reply = assistant.send("Generate a monthly report").unwrap();
        assert!(reply.content.contains("balance sheets"));
    }

    #[test]
    fn test_fallback_echoes_question() {
        let mut assistant = Assistant::new();
        let reply = assistant.send("What color is the sky?").unwrap();
        assert!(reply.content.contains("What color is the sky?"));
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut assistant = Assistant::new();
        assert!(assistant.send("   ").is_none());
        assert_eq!(assistant.messages().len(), 1);
    }

    #[test]
    fn test_send_appends_both_messages() {
        let mut assistant = Assistant::new();
        assistant.send("hello").unwrap();
        assert_eq!(assistant.messages().len(), 3);
        assert_eq!(assistant.messages()[1].role, ChatRole::User);
        assert_eq!(assistant.messages()[2].role, ChatRole::Assistant);
    }

    #[test]
    fn test_clear_resets_transcript() {
        let mut assistant = Assistant::new();
        assistant.send("hello").unwrap();
        assistant.clear();
        assert_eq!(assistant.messages().len(), 1);
        assert!(assistant.messages()[0].content.starts_with("Chat cleared"));
    }
}
