use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ming_base::Location;
use ming_calendar::ApproxSolarTerms;
use ming_lexicon::Lexicon;
use ming_name::{FiveRules, Name, NameSpec, rank};
use ming_texts::{Language, MessageStore};

fn fixture_name() -> Name {
    let mut name = Name::default();
    let family = NameSpec {
        runes: vec!['李'],
        strokes: vec![7],
        five_elements: vec![0],
        string: "李".into(),
        length: 1,
    };
    let given = NameSpec {
        runes: vec!['明', '轩'],
        strokes: vec![8, 10],
        five_elements: vec![1, 0],
        string: "明轩".into(),
        length: 2,
    };
    name.traditional.family_name = family.clone();
    name.traditional.given_name = given.clone();
    name.simplified.family_name = family.clone();
    name.simplified.given_name = given.clone();
    name.original.family_name = family;
    name.original.given_name = given;
    name.pinyin = vec!["li".into(), "ming".into(), "xuan".into()];
    name.pinyin_tone = vec!["lǐ".into(), "míng".into(), "xuān".into()];
    name
}

fn bench_five_rules(c: &mut Criterion) {
    let name = fixture_name();
    let messages = MessageStore::empty();
    c.bench_function("five_rules_grid", |b| {
        b.iter(|| FiveRules::compute(black_box(&name), &messages, Language::Simplified))
    });
}

fn bench_full_rank(c: &mut Criterion) {
    let lexicon = Lexicon::empty();
    let messages = MessageStore::empty();
    let shanghai = Location {
        latitude: 31.2304,
        longitude: 121.4737,
    };
    c.bench_function("rank_full_report", |b| {
        b.iter(|| {
            rank(
                Language::Simplified,
                black_box(fixture_name()),
                black_box(946_684_800),
                shanghai,
                &lexicon,
                &messages,
                &ApproxSolarTerms,
            )
        })
    });
}

criterion_group!(benches, bench_five_rules, bench_full_rank);
criterion_main!(benches);
