//! Alignment Layout Benchmarking Tool
//!
//! Measures the layout pipeline on a real collation output file, such as the
//! JSON emitted by CollateX for a set of transcriptions.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalization**: every raw reading of every column
//! 2. **Layout**: normalization, grouping, palette assignment, pagination and
//!    assembly together
//! 3. **Render**: HTML serialization of the finished layout
//!
//! ## Usage
//!
//! ```bash
//! # Standard width budget (100)
//! ./target/release/layout_bench /path/to/alignment.json
//!
//! # Custom width budget
//! ./target/release/layout_bench /path/to/alignment.json 80
//! ```
//!
//! ## Output
//!
//! ```text
//! === Layout ===
//! --------------------------------
//! Mode        : Layout
//! Elapsed     : 0.004 s
//! Columns/sec : 1_254_001
//! --------------------------------
//! ```

use std::env;
use std::fs;
use std::process;
use std::time::{Duration, Instant};

use collator_core::{render_html, AlignmentLayout, AlignmentTable};
use collator_types::LayoutConfig;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: layout_bench <alignment.json> [width_budget]");
        process::exit(1);
    }

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str)) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(path: &str, budget: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = LayoutConfig::default();
    if let Some(budget) = budget {
        config.width_budget = budget.parse()?;
    }

    println!("Loading file...");
    let input = fs::read_to_string(path)?;
    let table = AlignmentTable::from_json(&input)?;
    let engine = AlignmentLayout::new(config)?;

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!(
        "Table:     {} witnesses x {} columns\n",
        table.witness_count(),
        table.column_count()
    );

    bench_normalize(&engine, &table);
    bench_layout(&engine, &table)?;
    bench_render(&engine, &table)?;

    Ok(())
}

fn bench_normalize(engine: &AlignmentLayout, table: &AlignmentTable) {
    let normalizer = engine.normalizer();
    let mut out = String::with_capacity(256);

    println!("=== Normalize ===");

    let mut pass = || {
        for column in table.columns() {
            for raw in column.readings() {
                normalizer.normalize_into(raw, &mut out);
                std::hint::black_box(&out);
            }
        }
    };

    warmup(&mut pass);
    let elapsed = measure(&mut pass);

    print_perf("Normalize", table.column_count(), elapsed);
}

fn bench_layout(
    engine: &AlignmentLayout,
    table: &AlignmentTable,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Layout ===");

    let (_, stats) = engine.layout_with_stats(table)?;
    println!("Result      : {}", stats);

    let mut pass = || {
        std::hint::black_box(engine.layout(table).ok());
    };

    warmup(&mut pass);
    let elapsed = measure(&mut pass);

    print_perf("Layout", table.column_count(), elapsed);
    Ok(())
}

fn bench_render(
    engine: &AlignmentLayout,
    table: &AlignmentTable,
) -> Result<(), Box<dyn std::error::Error>> {
    let matrix = engine.layout(table)?;

    println!("=== Render ===");

    let mut bytes = 0usize;
    let mut pass = || {
        bytes = render_html(&matrix).len();
        std::hint::black_box(bytes);
    };

    warmup(&mut pass);
    let elapsed = measure(&mut pass);

    println!("Output      : {}", fmt_bytes(bytes as u64));
    print_perf("Render", table.column_count(), elapsed);
    Ok(())
}

fn warmup<F: FnMut()>(f: &mut F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(f: &mut F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, columns: usize, elapsed: Duration) {
    let secs = elapsed.as_secs_f64();

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);

    if columns > 0 && secs > 0.0 {
        println!("Columns/sec : {}", fmt_count((columns as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
