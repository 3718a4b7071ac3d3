/// App display language offered on the welcome screen
#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

/// Voice used by the assistant for a given language
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceLanguage {
    pub code: &'static str,
    pub name: &'static str,
    pub voice: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoiceCommand {
    pub command: &'static str,
    pub english: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: &'static str,
    pub translation: &'static str,
    pub time: &'static str,
}

/// Welcome screen feature blurb
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}
