use ming_base::Location;
use ming_calendar::ApproxSolarTerms;
use ming_lexicon::{Lexicon, WordList};
use ming_name::{Name, NameSpec, rank};
use ming_texts::{Language, MessageStore};

const SHANGHAI: Location = Location {
    latitude: 31.2304,
    longitude: 121.4737,
};

// 2000-01-01T00:00:00Z.
const MILLENNIUM: i64 = 946_684_800;

fn fixture_name(family_strokes: &[i64], given_strokes: &[i64]) -> Name {
    let spec = |strokes: &[i64]| NameSpec {
        runes: vec!['某'; strokes.len()],
        strokes: strokes.to_vec(),
        five_elements: vec![-1; strokes.len()],
        string: "某".repeat(strokes.len()),
        length: strokes.len(),
    };
    let mut name = Name::default();
    name.traditional.family_name = spec(family_strokes);
    name.traditional.given_name = spec(given_strokes);
    name.simplified = name.traditional.clone();
    name.original = name.traditional.clone();
    name.pinyin = vec!["mou".into(); family_strokes.len() + given_strokes.len()];
    name.pinyin_tone = name.pinyin.clone();
    name
}

fn words_from(lines: &str, file: &str) -> WordList {
    let dir = std::env::temp_dir().join(format!("ming_name_rank_test_{file}"));
    std::fs::create_dir_all(dir.join("list")).unwrap();
    std::fs::write(dir.join("list").join(file), lines).unwrap();
    let (words, _) = if file.starts_with("Sensitive") {
        WordList::load_sensitive(&dir).unwrap()
    } else {
        WordList::load_common(&dir).unwrap()
    };
    words
}

#[test]
fn full_report_for_a_double_family_name() {
    let name = fixture_name(&[7, 9], &[11, 13]);
    let lexicon = Lexicon::empty();
    let messages = MessageStore::empty();

    let data = rank(
        Language::Simplified,
        name,
        MILLENNIUM,
        SHANGHAI,
        &lexicon,
        &messages,
        &ApproxSolarTerms,
    );

    assert!(!data.illegal);
    assert_eq!(data.five_rules.tian_ge, 16);
    assert_eq!(data.five_rules.ren_ge, 20);
    assert_eq!(data.five_rules.di_ge, 24);
    assert_eq!(data.five_rules.wai_ge, 20);
    assert_eq!(data.five_rules.zong_ge, 40);

    // The birth calendar flows into the pillar-derived reports.
    assert_eq!(
        (data.calendar.ganzhi.year.stem, data.calendar.ganzhi.year.branch),
        (5, 7)
    );
    assert_eq!(data.calendar.lunar.year, 1999);
    assert_eq!(data.calendar.lunar.animal_sign, 3);
    assert_eq!(data.eight_characters.year, data.calendar.ganzhi.year);
    assert_eq!(data.eight_characters.day, data.calendar.ganzhi.day);
    assert!(data.animal.radicals.is_some());

    assert_eq!(data.rank.rank_five_rules, data.five_rules.composite_score());
    assert_eq!(data.rank.rank_total, data.rank.rank_five_rules);
    assert!((0..=100).contains(&data.rank.rank_total));
}

#[test]
fn ganzhi_tallies_cover_all_pillars() {
    let data = rank(
        Language::Simplified,
        fixture_name(&[7], &[8]),
        MILLENNIUM,
        SHANGHAI,
        &Lexicon::empty(),
        &MessageStore::empty(),
        &ApproxSolarTerms,
    );

    let stems_and_mains = data.ganzhi_five_elements.five_elements;
    // Four stems plus four branch main elements.
    assert_eq!(
        stems_and_mains.wood
            + stems_and_mains.fire
            + stems_and_mains.earth
            + stems_and_mains.metal
            + stems_and_mains.water,
        8
    );
    let total = data.ganzhi_five_elements.five_elements_total;
    let zhi = data.ganzhi_five_elements.five_elements_zhi;
    assert_eq!(total.wood, stems_and_mains.wood + zhi.wood);
    assert_eq!(total.water, stems_and_mains.water + zhi.water);
}

#[test]
fn screened_word_short_circuits() {
    let mut lexicon = Lexicon::empty();
    lexicon.sensitive_words = words_from("mou,mou:某某\n", "SensitiveWords.txt");

    let data = rank(
        Language::Simplified,
        fixture_name(&[7], &[8]),
        MILLENNIUM,
        SHANGHAI,
        &lexicon,
        &MessageStore::empty(),
        &ApproxSolarTerms,
    );

    assert!(data.illegal);
    assert!(data.homonyms.is_empty());
    // The rest of the report stays untouched.
    assert_eq!(data.five_rules.tian_ge, 0);
    assert_eq!(data.calendar.solar.year, 0);
    assert_eq!(data.rank.rank_total, 0);
}

#[test]
fn common_words_become_homonyms() {
    let mut lexicon = Lexicon::empty();
    lexicon.common_words = words_from("mou,mou:谋谋;牟牟\n", "CommonWords.txt");

    let data = rank(
        Language::Simplified,
        fixture_name(&[7], &[8]),
        MILLENNIUM,
        SHANGHAI,
        &lexicon,
        &MessageStore::empty(),
        &ApproxSolarTerms,
    );

    assert!(!data.illegal);
    assert_eq!(data.homonyms, vec!["谋谋".to_owned(), "牟牟".to_owned()]);
    assert!(data.rank.rank_total >= 0);
}
