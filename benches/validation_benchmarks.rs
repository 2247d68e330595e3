use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use testinfo_validator::schema::Schema;
use testinfo_validator::{walk, DocumentFamily, Element, ValidationContext, Validator};

const KRSU_XSD: &str = include_str!("../krsu.xsd");

/// Generate a testinfo document with `tests` test elements for a scenario
fn generate_document(tests: usize, scenario: &str) -> String {
    let mut xml = String::from("<testinfo>\n");

    match scenario {
        "all_valid" => {
            xml.push_str("  <timelimit>1000</timelimit>\n  <memorylimit>65536</memorylimit>\n");
        }
        "bad_limits" => {
            xml.push_str("  <timelimit>1s</timelimit>\n  <memorylimit>64M</memorylimit>\n");
        }
        _ => {
            xml.push_str("  <timeout>1000</timeout>\n");
        }
    }

    for g in 0..tests.div_ceil(10) {
        xml.push_str(&format!("  <group points=\"{}\">\n", g));
        for t in 0..10usize.min(tests - g * 10) {
            let n = g * 10 + t;
            xml.push_str(&format!("    <test input=\"{n}.in\" output=\"{n}.out\"/>\n"));
        }
        xml.push_str("  </group>\n");
    }

    xml.push_str("</testinfo>\n");
    xml
}

/// Benchmark the full pipeline (parse, schema check, walk) by scenario
fn bench_pipeline_scenarios(c: &mut Criterion) {
    let family = DocumentFamily::Krsu.load().expect("load family");
    let schema = Schema::parse(KRSU_XSD).expect("compile schema");
    let mut validator = Validator::with_schema(family, schema);
    let ctx = ValidationContext::default();

    let mut group = c.benchmark_group("pipeline_scenarios");

    for scenario in ["all_valid", "bad_limits", "unknown_tags"] {
        let xml = generate_document(1_000, scenario);

        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_with_input(BenchmarkId::new("scenario", scenario), &xml, |b, xml| {
            b.iter(|| {
                let result = validator.validate_str(black_box(xml), black_box(&ctx));
                black_box(result)
            })
        });
    }

    group.finish();
}

/// Benchmark the tree walk alone at different document sizes
fn bench_walk_scalability(c: &mut Criterion) {
    let registry = DocumentFamily::Krsu.load().expect("load family").registry;
    let ctx = ValidationContext::default();

    let mut group = c.benchmark_group("walk_scalability");

    for &size in &[100, 1_000, 10_000] {
        let xml = generate_document(size, "all_valid");
        let doc = roxmltree::Document::parse(&xml).expect("parse");
        let root = Element::from_node(doc.root_element());

        group.throughput(Throughput::Elements(root.count() as u64));
        group.bench_with_input(BenchmarkId::new("tests", size), &root, |b, root| {
            b.iter(|| black_box(walk(black_box(root), &registry, &ctx)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline_scenarios, bench_walk_scalability);
criterion_main!(benches);
