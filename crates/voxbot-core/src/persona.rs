//! Bot persona — default identity, greeting, and the seed LLM context.

use serde::{Deserialize, Serialize};

use crate::config::schema::BotConfig;

pub const DEFAULT_BOT_NAME: &str = "Production Voice AI Assistant";

pub const DEFAULT_PERSONALITY: &str = "You are a professional AI assistant deployed in production. \
You speak clearly and concisely, providing helpful and accurate information. \
You are having a voice conversation, so keep responses natural and conversational. \
Be professional but friendly in your interactions.";

/// Cartesia "British Reading Lady".
pub const DEFAULT_VOICE_ID: &str = "71a7ad14-091c-4e8e-a314-022ece01c121";

/// A chat message in the OpenAI-style `{role, content}` shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

impl BotConfig {
    /// Greeting spoken when a client connects.
    pub fn greeting(&self, llm_display_name: &str) -> String {
        format!(
            "Hello! I'm {}, powered by Cartesia's voice technology and {}. How can I help you today?",
            self.name, llm_display_name
        )
    }

    /// Context the LLM starts every session with.
    pub fn initial_context(&self) -> Vec<ChatMessage> {
        vec![ChatMessage::system(self.personality.clone())]
    }
}

/// Instruction appended to the context on client connect so the bot
/// speaks the greeting first.
pub fn greeting_instruction(greeting: &str) -> ChatMessage {
    ChatMessage::system(format!("Say: '{greeting}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_text() {
        let bot = BotConfig::default();
        assert_eq!(
            bot.greeting("OpenAI"),
            "Hello! I'm Production Voice AI Assistant, powered by Cartesia's voice \
             technology and OpenAI. How can I help you today?"
        );
    }

    #[test]
    fn test_initial_context_is_single_system_message() {
        let bot = BotConfig {
            name: "Kiosk".to_string(),
            personality: "Be brief.".to_string(),
        };
        let ctx = bot.initial_context();
        assert_eq!(ctx, vec![ChatMessage::system("Be brief.")]);
    }

    #[test]
    fn test_greeting_instruction() {
        let msg = greeting_instruction("Hi there");
        assert_eq!(msg.role, "system");
        assert_eq!(msg.content, "Say: 'Hi there'");
    }

    #[test]
    fn test_chat_message_serializes_flat() {
        let raw = serde_json::to_value(ChatMessage::system("x")).unwrap();
        assert_eq!(raw, serde_json::json!({"role": "system", "content": "x"}));
    }
}
