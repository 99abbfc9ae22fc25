use serde::Deserialize;
use serde::Serialize;

/// Enum `MessageType` represents who authored a message.
///
/// # Usage
/// ```rust,ignore
/// let system_message_type = MessageType::SystemMessage;
/// let human_message_type = MessageType::HumanMessage;
/// ```
#[derive(PartialEq, Eq, Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub enum MessageType {
    #[serde(rename = "system")]
    SystemMessage,
    #[serde(rename = "ai")]
    AIMessage,
    #[default]
    #[serde(rename = "human")]
    HumanMessage,
}

/// Struct `Message` represents a message with its content and type.
///
/// # Usage
/// ```rust,ignore
/// let human_message = Message::new_human_message("Hello");
/// let system_message = Message::new_system_message("You are terse.");
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Message {
    pub content: String,
    #[serde(rename = "role")]
    pub message_type: MessageType,
}

impl Message {
    pub fn new_human_message<T: std::fmt::Display>(content: T) -> Self {
        Message {
            content: content.to_string(),
            message_type: MessageType::HumanMessage,
        }
    }

    pub fn new_system_message<T: std::fmt::Display>(content: T) -> Self {
        Message {
            content: content.to_string(),
            message_type: MessageType::SystemMessage,
        }
    }

    pub fn new_ai_message<T: std::fmt::Display>(content: T) -> Self {
        Message {
            content: content.to_string(),
            message_type: MessageType::AIMessage,
        }
    }
}

#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct Messages {
    pub messages: Vec<Message>,
}

impl Messages {
    pub fn builder() -> MessagesBuilder {
        MessagesBuilder::new()
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// System messages joined with a blank line, or `None` if there are none.
    pub fn system_prompt(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .messages
            .iter()
            .filter(|m| m.message_type == MessageType::SystemMessage)
            .map(|m| m.content.as_str())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n\n"))
        }
    }
}

impl AsRef<[Message]> for Messages {
    fn as_ref(&self) -> &[Message] {
        &self.messages
    }
}

pub struct MessagesBuilder {
    messages: Vec<Message>,
}

impl Default for MessagesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MessagesBuilder {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn add_human_message(mut self, content: &str) -> Self {
        self.messages.push(Message::new_human_message(content));
        self
    }

    pub fn add_system_message(mut self, content: &str) -> Self {
        self.messages.push(Message::new_system_message(content));
        self
    }

    pub fn add_ai_message(mut self, content: &str) -> Self {
        self.messages.push(Message::new_ai_message(content));
        self
    }

    pub fn build(self) -> Messages {
        Messages {
            messages: self.messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_order() {
        let messages = Messages::builder()
            .add_system_message("be brief")
            .add_human_message("Hello")
            .add_ai_message("Hi")
            .build();
        let kinds: Vec<MessageType> = messages
            .as_ref()
            .iter()
            .map(|m| m.message_type)
            .collect();
        assert_eq!(
            kinds,
            vec![
                MessageType::SystemMessage,
                MessageType::HumanMessage,
                MessageType::AIMessage
            ]
        );
    }

    #[test]
    fn test_system_prompt_joins_system_messages() {
        let messages = Messages::builder()
            .add_system_message("one")
            .add_human_message("Hello")
            .add_system_message("two")
            .build();
        assert_eq!(messages.system_prompt().as_deref(), Some("one\n\ntwo"));

        let messages = Messages::builder().add_human_message("Hello").build();
        assert_eq!(messages.system_prompt(), None);
    }
}
