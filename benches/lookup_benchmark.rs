use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fips::models::Value;
use fips::store::{county_records, state_records, StateSet};
use fips::table::lookup;
use fips::{Counties, County, State, States};

fn bench_table_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("states_all", |b| b.iter(|| state_records(black_box(StateSet::all()))));
    group.bench_function("counties", |b| b.iter(|| county_records().unwrap()));
    group.bench_function("counties_indexed", |b| {
        b.iter(|| Counties::new().use_index(["ST", "COUNTY"]).load().unwrap())
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let states = state_records(StateSet::all());
    let counties = county_records().unwrap();
    let mut group = c.benchmark_group("lookup");

    for st in ["AL", "CA", "WY", "MX"] {
        group.bench_with_input(BenchmarkId::new("state_by_st", st), &st, |b, st| {
            b.iter(|| lookup(&states, &["ST"], &[Value::from(*st)]).unwrap())
        });
    }

    group.bench_function("county_by_name", |b| {
        b.iter(|| {
            lookup(
                &counties,
                &["ST", "COUNTY"],
                &[Value::from("CA"), Value::from("Alameda")],
            )
            .unwrap()
        })
    });

    group.finish();
}

fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    group.bench_function("state", |b| b.iter(|| State::by_abbreviation(black_box("CA")).unwrap()));
    group.bench_function("county", |b| {
        b.iter(|| County::by_name(black_box("CA"), black_box("Alameda")).unwrap())
    });
    group.bench_function("states_loc", |b| {
        let table = States::all().use_index(["ST"]).load().unwrap();
        b.iter(|| table.loc(&[Value::from("QC")]).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_table_construction, bench_lookup, bench_resolution);
criterion_main!(benches);
