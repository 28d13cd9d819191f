//! PDF/UA checking benchmarks
//!
//! Measures batch checking over flat node lists and whole-tree validation
//! over generated documents of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pdfua_oxide::compliance::{AlternativeDescriptionsChecker, PdfUaChecker, PdfUaValidator};
use pdfua_oxide::elements::{ImageChunk, TextBlock, TextChunk, TextLine};
use pdfua_oxide::geometry::{BoundingBox, Rect};
use pdfua_oxide::structure::{
    keys, ContentNode, FigureNode, SemanticNode, SemanticTreeBuilder, SemanticType,
};

fn bbox(page: u32) -> BoundingBox {
    BoundingBox::new(page, Rect::new(72.0, 500.0, 300.0, 100.0))
}

fn paragraph(page: u32) -> ContentNode {
    let line = TextLine::new(bbox(page), vec![TextChunk::new(bbox(page), "Lorem ipsum dolor sit amet")]);
    ContentNode::new(SemanticType::Paragraph)
        .with_bounding_box(bbox(page))
        .with_text_block(TextBlock::new(bbox(page), vec![line]))
}

fn figure(index: usize) -> FigureNode {
    let figure = FigureNode::new().with_image(ImageChunk::new(bbox(0), 800, 600));
    // Every other figure is described
    if index % 2 == 0 {
        figure.with_attribute(keys::ALT, "Chart")
    } else {
        figure
    }
}

fn table(page: u32) -> ContentNode {
    let row = |t: SemanticType| {
        (0..4).fold(ContentNode::new(SemanticType::TableRow), |row, _| {
            row.with_child(ContentNode::new(t).with_attribute(keys::SCOPE, "Column"))
        })
    };
    (0..8).fold(
        ContentNode::new(SemanticType::Table)
            .with_bounding_box(bbox(page))
            .with_child(row(SemanticType::TableHeader)),
        |table, _| table.with_child(row(SemanticType::TableData)),
    )
}

/// Document with `sections` sections, each holding paragraphs, a table and a figure.
fn document(sections: usize) -> SemanticNode {
    let root = (0..sections).fold(ContentNode::new(SemanticType::Document), |doc, i| {
        let page = i as u32;
        let section = (0..10).fold(ContentNode::new(SemanticType::Section), |s, _| {
            s.with_child(paragraph(page))
        });
        doc.with_child(section.with_child(table(page)).with_child(figure(i)))
    });
    SemanticTreeBuilder::new().build(root)
}

/// Benchmark batch checking of flat figure lists
fn bench_check_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_all_figures");

    for count in [100, 1_000, 10_000] {
        let nodes: Vec<SemanticNode> = (0..count).map(|i| figure(i).into()).collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &nodes, |b, nodes| {
            b.iter(|| black_box(AlternativeDescriptionsChecker.check_all(black_box(nodes))));
        });
    }

    group.finish();
}

/// Benchmark full validation with every requirement enabled
fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_document");
    let validator = PdfUaValidator::new();

    for sections in [10, 100] {
        let root = document(sections);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_nodes", root.node_count())),
            &root,
            |b, root| {
                b.iter(|| black_box(validator.validate(black_box(root))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_check_all, bench_validate);
criterion_main!(benches);
