// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use statsguru_scrape::extract::extract_tables;
use statsguru_scrape::file::sanitize_filename;

/// Synthesized innings list in the shape Statsguru serves: one header
/// row plus a few hundred data rows.
fn sample_page(rows: usize) -> String {
    let mut html = String::with_capacity(rows * 120);
    html.push_str("<!DOCTYPE html><html><head><title>Player innings</title></head><body>");
    html.push_str("<table><thead><tr>");
    for h in ["Runs", "Mins", "BF", "4s", "6s", "SR", "Opposition", "Ground", "Date"] {
        html.push_str(&format!("<th>{h}</th>"));
    }
    html.push_str("</tr></thead><tbody>");
    for i in 0..rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>4</td><td>0</td><td>81.2</td>\
             <td>v Australia</td><td>Melbourne</td><td>12 Mar 2019</td></tr>",
            i % 150,
            i % 240,
            i % 180,
        ));
    }
    html.push_str("</tbody></table></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let doc = sample_page(400);

    c.bench_function("extract_tables_400_rows", |b| {
        b.iter(|| {
            let tables = extract_tables(black_box(&doc));
            black_box(tables.len())
        })
    });

    c.bench_function("sanitize_filename", |b| {
        b.iter(|| {
            black_box(sanitize_filename(black_box(
                "type=fielding__view=dismissal_summary__class=3__table1.csv",
            )))
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
