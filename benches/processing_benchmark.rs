use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use waypoint_extractor::processors::{PlacemarkExporter, WaypointExtractor};
use waypoint_extractor::readers::RecordTokenizer;
use waypoint_extractor::utils::coordinates::dms_to_decimal;

const STATES: [&str; 8] = ["NSW", "QLD", "VIC", "TAS", "SA", "WA", "NT", "ACT"];

// Create a page of text shaped like an AIP waypoint table
fn create_test_page(rows: usize) -> String {
    let mut page = String::from("GEN 3.2 - 61\nVFR WAYPOINTS\nWAYPOINT STATE CODE LAT LONG\n");

    for i in 0..rows {
        let state = STATES[i % STATES.len()];
        page.push_str(&format!(
            "TEST WAYPOINT {} {} W{:03} {:02}{:02}{:02}S {:03}{:02}{:02}E\n",
            i,
            state,
            i % 1000,
            10 + i % 30,
            i % 60,
            (i * 7) % 60,
            115 + i % 40,
            (i * 3) % 60,
            (i * 11) % 60
        ));
    }

    page
}

fn benchmark_dms_conversion(c: &mut Criterion) {
    let tokens = ["204126S", "1393017E", "0773000E", "360402S", "1465732W"];

    c.bench_function("dms_to_decimal", |b| {
        b.iter(|| {
            for token in &tokens {
                black_box(dms_to_decimal(black_box(token)).ok());
            }
        })
    });
}

fn benchmark_tokenizer(c: &mut Criterion) {
    let tokenizer = RecordTokenizer::new();
    let lines = [
        "MOUNT ISA QLD MTI 204126S 1393017E",
        "LAKE MACQUARIE ENTRANCE NSW LMQE 330530S 1513910E",
        "WAYPOINT STATE CODE LAT LONG",
        "28 NOV 2024",
    ];

    c.bench_function("tokenize_line", |b| {
        b.iter(|| {
            for line in &lines {
                let _ = black_box(tokenizer.tokenize(black_box(line)));
            }
        })
    });
}

fn benchmark_extract_and_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_and_export");

    for rows in [100, 1000, 5000] {
        let page = create_test_page(rows);

        group.bench_with_input(BenchmarkId::new("rows", rows), &page, |b, page| {
            b.iter(|| {
                let (collection, _report) = WaypointExtractor::new().extract_pages([page.as_str()], None);
                let partitions = collection.partition_by_state();
                let exporter = PlacemarkExporter::new();
                for partition in partitions.values() {
                    black_box(exporter.export_all(partition.records()));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_dms_conversion,
    benchmark_tokenizer,
    benchmark_extract_and_export
);
criterion_main!(benches);
