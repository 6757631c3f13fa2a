//! Ten-god annotation texts.

use serde::Serialize;

use ming_texts::{Alias, Language, Message, MessageStore, alias};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TenGod {
    pub alias: String,
    pub representative: String,
    pub description: String,
    pub soul: String,
}

/// Localized texts for the ten-god at `index` (see
/// [`ming_base::ten_god_index`]).
pub fn ten_god(index: i64, messages: &MessageStore, language: Language) -> TenGod {
    TenGod {
        alias: alias(Alias::TenGod, index, language).to_owned(),
        representative: alias(Alias::TenGodRepresentative, index, language).to_owned(),
        description: messages
            .get(Message::TenGodDescription, index, language)
            .to_owned(),
        soul: messages.get(Message::TenGodSoul, index, language).to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_without_messages() {
        let store = MessageStore::empty();
        let god = ten_god(0, &store, Language::Simplified);
        assert!(!god.alias.is_empty());
        assert!(god.description.is_empty());
        let god = ten_god(42, &store, Language::Simplified);
        assert!(god.alias.is_empty());
    }
}
