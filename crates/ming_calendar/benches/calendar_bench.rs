use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ming_base::Location;
use ming_calendar::{ApproxSolarTerms, Calendar, SolarTermProvider};

const SHANGHAI: Location = Location {
    latitude: 31.2304,
    longitude: 121.4737,
};

fn bench_solar_terms(c: &mut Criterion) {
    c.bench_function("solar_terms_year", |b| {
        b.iter(|| ApproxSolarTerms.solar_terms(black_box(2024)))
    });
}

fn bench_calendar(c: &mut Criterion) {
    c.bench_function("calendar_full_report", |b| {
        b.iter(|| Calendar::new(black_box(946_684_800), SHANGHAI, &ApproxSolarTerms))
    });
}

criterion_group!(benches, bench_solar_terms, bench_calendar);
criterion_main!(benches);
