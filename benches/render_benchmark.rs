//! Benchmarks for specgen checking and rendering.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic specifications of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use specgen::model::{
    Block, Document, Grammar, List, ListItem, Paragraph, Rule, Section, SpanStyle, Term,
};
use specgen::{package, render, RenderOptions};

/// Creates a synthetic specification with the given number of top-level sections.
fn create_test_document(section_count: usize) -> Document {
    let mut doc = Document::titled("Benchmark Language");

    for i in 0..section_count {
        let mut prose = Paragraph::with_text("The rule ")
            .with_span(SpanStyle::Reference, format!("rule{}", i));
        prose.add_text(" is   defined   below and referenced from the grammar.");

        let list = List::new()
            .with_item(ListItem::text("first item"))
            .with_item(ListItem::text("second item"));

        let grammar = Grammar::new()
            .with_rule(Rule::token(format!("rule{}", i)).with_production(vec![
                Term::plus(Term::nt("digit")),
            ]))
            .with_rule(
                Rule::syntax(format!("expr{}", i))
                    .with_production(vec![Term::nt(format!("rule{}", i))])
                    .with_production(vec![
                        Term::nt(format!("expr{}", i)),
                        Term::t("+"),
                        Term::nt(format!("rule{}", i)),
                    ]),
            );

        let section = Section::new(format!("Section {}", i + 1))
            .with_block(Block::Text(prose))
            .with_block(Block::NumberedList(list))
            .with_section(
                Section::new("Grammar")
                    .with_block(Block::Grammar(grammar))
                    .with_block(Block::Code(Paragraph::with_text("    a + b\n      + c"))),
            );
        doc.add_section(section);
    }

    doc
}

/// Benchmark the grammar checker.
fn bench_check(c: &mut Criterion) {
    let doc = create_test_document(50);

    c.bench_function("check_50_sections", |b| {
        b.iter(|| specgen::check(black_box(&doc)));
    });
}

/// Benchmark both renderers at various sizes.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let options = RenderOptions::default();

    for section_count in [1, 10, 100].iter() {
        let doc = create_test_document(*section_count);

        group.bench_function(format!("markdown_{}_sections", section_count), |b| {
            b.iter(|| render::to_markdown(black_box(&doc), &options).unwrap());
        });

        group.bench_function(format!("package_{}_sections", section_count), |b| {
            b.iter(|| package::assemble(&render::to_styled(black_box(&doc), &options), &options));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_check, bench_render);
criterion_main!(benches);
