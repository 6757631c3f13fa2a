//! Sound five elements (nayin) of the four pillars.

use serde::Serialize;

use ming_base::GanzhiPair;
use ming_calendar::GanzhiReport;
use ming_texts::{Alias, Language, Message, MessageStore, alias};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SoundFiveElement {
    #[serde(skip)]
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SoundFiveElements {
    pub year_sound: SoundFiveElement,
    pub month_sound: SoundFiveElement,
    pub day_sound: SoundFiveElement,
    pub hour_sound: SoundFiveElement,
}

/// Nayin of one pair: the 60-cycle ordinal, its two-pair alias, and the
/// per-ordinal description. Invalid pairs come back blank.
pub fn ganzhi_sound(pair: GanzhiPair, messages: &MessageStore, language: Language) -> SoundFiveElement {
    let id = pair.value();
    if !(0..60).contains(&id) {
        return SoundFiveElement::default();
    }
    SoundFiveElement {
        id,
        name: alias(Alias::SoundFiveElement, id / 2, language).to_owned(),
        description: messages
            .get(Message::SoundFiveElementDescription, id, language)
            .to_owned(),
    }
}

impl SoundFiveElements {
    pub fn compute(ganzhi: &GanzhiReport, messages: &MessageStore, language: Language) -> Self {
        SoundFiveElements {
            year_sound: ganzhi_sound(ganzhi.year, messages, language),
            month_sound: ganzhi_sound(ganzhi.month, messages, language),
            day_sound: ganzhi_sound(ganzhi.day, messages, language),
            hour_sound: ganzhi_sound(ganzhi.hour, messages, language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_share_a_sound() {
        let store = MessageStore::empty();
        // JiaZi (0) and YiChou (1) belong to the same nayin.
        let a = ganzhi_sound(GanzhiPair::from_value(0), &store, Language::Simplified);
        let b = ganzhi_sound(GanzhiPair::from_value(1), &store, Language::Simplified);
        assert_eq!(a.name, b.name);
        assert!(!a.name.is_empty());
        assert_eq!((a.id, b.id), (0, 1));
    }

    #[test]
    fn invalid_pair_is_blank() {
        let store = MessageStore::empty();
        let s = ganzhi_sound(GanzhiPair::new(0, 1), &store, Language::Simplified);
        assert_eq!(s, SoundFiveElement::default());
    }
}
