//! The full name report: screening, calendar, grids, and composite ranks.

use serde::Serialize;

use ming_base::{Element, FiveElementsCount, Location, branch, stem_element};
use ming_calendar::{Calendar, SolarTermProvider};
use ming_lexicon::{Lexicon, Surname, XinhuaEntry};
use ming_texts::{Language, Message, MessageStore};

use crate::animal::{AnimalRadicals, animal_radicals};
use crate::eight_characters::EightCharacters;
use crate::five_rules::FiveRules;
use crate::name::Name;
use crate::sounds::SoundFiveElements;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GanzhiFiveElements {
    pub five_elements: FiveElementsCount,
    pub five_elements_zhi: FiveElementsCount,
    pub five_elements_total: FiveElementsCount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DictXinhua {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub family_name_xinhua: Vec<XinhuaEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub middle_name_xinhua: Vec<XinhuaEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub given_name_xinhua: Vec<XinhuaEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnimalReport {
    pub radicals: Option<AnimalRadicals>,
    pub years: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankSummary {
    pub rank_five_rules: i64,
    pub rank_total: i64,
}

/// A cited poem, embedded by value in the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PoetryCitation {
    pub author: String,
    pub title: String,
    pub paragraphs: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RankData {
    pub name: Name,
    pub dict_xinhua: DictXinhua,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bai_jia_xing: Option<Surname>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub poetries: Vec<PoetryCitation>,
    pub five_rules: FiveRules,
    pub eight_characters: EightCharacters,
    pub calendar: Calendar,
    pub ganzhi_five_elements: GanzhiFiveElements,
    pub sound_five_elements: SoundFiveElements,
    pub animal: AnimalReport,
    pub rank: RankSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub homonyms: Vec<String>,
    pub illegal: bool,
}

/// Sliding windows of length 2..=n over the pinyin sequence.
fn group_pinyin(pinyin: &[String]) -> Vec<String> {
    let mut groups = Vec::new();
    for len in 2..=pinyin.len() {
        for window in pinyin.windows(len) {
            groups.push(window.join(","));
        }
    }
    groups
}

// Hidden stems of each branch contribute to the zhi tally; the main
// element tally follows the traditional assignment with Shen counted as
// earth.
fn tally_branches(branches: &[i64]) -> (FiveElementsCount, FiveElementsCount) {
    let mut main = FiveElementsCount::default();
    let mut hidden = FiveElementsCount::default();
    for &b in branches {
        let (main_element, hidden_elements): (Element, &[Element]) = match b {
            branch::ZI => (Element::Water, &[Element::Water]),
            branch::CHOU => (Element::Earth, &[Element::Earth, Element::Metal, Element::Water]),
            branch::YIN => (Element::Wood, &[Element::Wood, Element::Fire, Element::Earth]),
            branch::MAO => (Element::Wood, &[Element::Wood]),
            branch::CHEN => (Element::Earth, &[Element::Earth, Element::Water, Element::Wood]),
            branch::SI => (Element::Fire, &[Element::Fire, Element::Earth, Element::Metal]),
            branch::WU => (Element::Fire, &[Element::Fire, Element::Earth]),
            branch::WEI => (Element::Earth, &[Element::Earth, Element::Wood, Element::Fire]),
            branch::XU => (Element::Metal, &[Element::Metal, Element::Water, Element::Earth]),
            branch::YOU => (Element::Metal, &[Element::Metal]),
            branch::SHEN => (Element::Earth, &[Element::Earth, Element::Metal, Element::Fire]),
            branch::HAI => (Element::Water, &[Element::Water, Element::Wood]),
            _ => continue,
        };
        main.add(main_element);
        for &e in hidden_elements {
            hidden.add(e);
        }
    }
    (main, hidden)
}

fn tally_ganzhi(calendar: &Calendar) -> GanzhiFiveElements {
    let ganzhi = &calendar.ganzhi;
    let mut counts = GanzhiFiveElements::default();

    for stem in [
        ganzhi.year.stem,
        ganzhi.month.stem,
        ganzhi.day.stem,
        ganzhi.hour.stem,
    ] {
        if let Some(e) = stem_element(stem) {
            counts.five_elements.add(e);
        }
    }

    let (main, hidden) = tally_branches(&[
        ganzhi.year.branch,
        ganzhi.month.branch,
        ganzhi.day.branch,
        ganzhi.hour.branch,
    ]);
    counts.five_elements = counts.five_elements.sum(&main);
    counts.five_elements_zhi = hidden;
    counts.five_elements_total = counts.five_elements.sum(&counts.five_elements_zhi);
    counts
}

fn query_xinhua(name: &Name, lexicon: &Lexicon) -> DictXinhua {
    let entries = |runes: &[char]| {
        runes
            .iter()
            .filter_map(|&r| lexicon.xinhua.query(r).cloned())
            .collect()
    };
    DictXinhua {
        family_name_xinhua: entries(&name.simplified.family_name.runes),
        middle_name_xinhua: entries(&name.simplified.middle_name.runes),
        given_name_xinhua: entries(&name.simplified.given_name.runes),
    }
}

/// Ranks a name against a birth instant at a location. A screened-word
/// hit short-circuits to an otherwise empty report with `illegal` set.
pub fn rank(
    language: Language,
    name: Name,
    birth_time: i64,
    location: Location,
    lexicon: &Lexicon,
    messages: &MessageStore,
    provider: &dyn SolarTermProvider,
) -> RankData {
    let mut data = RankData {
        name,
        ..RankData::default()
    };

    for pinyin in group_pinyin(&data.name.pinyin) {
        if lexicon.sensitive_words.query(&pinyin).is_some() {
            data.illegal = true;
            return data;
        }
        if let Some(commons) = lexicon.common_words.query(&pinyin) {
            data.homonyms.extend_from_slice(commons);
        }
    }

    data.calendar = Calendar::new(birth_time, location, provider);
    data.calendar.localize(language);

    data.five_rules = FiveRules::compute(&data.name, messages, language);
    data.eight_characters = EightCharacters::compute(&data.calendar.ganzhi);
    data.ganzhi_five_elements = tally_ganzhi(&data.calendar);
    data.sound_five_elements =
        SoundFiveElements::compute(&data.calendar.ganzhi, messages, language);
    data.animal = AnimalReport {
        radicals: animal_radicals(data.calendar.lunar.animal_sign, messages, language),
        years: messages
            .get(Message::AnimalYear, data.calendar.lunar.animal_sign, language)
            .to_owned(),
    };
    data.dict_xinhua = query_xinhua(&data.name, lexicon);
    data.bai_jia_xing = lexicon
        .surnames
        .query(&data.name.simplified.family_name.string)
        .cloned();
    data.poetries = lexicon
        .poetry
        .query(&data.name.simplified.given_name.string)
        .into_iter()
        .map(|p| PoetryCitation {
            author: p.author.clone(),
            title: p.title.clone(),
            paragraphs: p.paragraphs.clone(),
        })
        .collect();

    data.rank.rank_five_rules = data.five_rules.composite_score();
    data.rank.rank_total = data.rank.rank_five_rules;

    data
}
