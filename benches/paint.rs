use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rainbow::ColorStream;
use std::hint::black_box;
use std::io::{self, Write};

fn text_block(lines: usize, letters: usize) -> Vec<u8> {
    let line: Vec<u8> = (0..letters).map(|_| fastrand::alphanumeric() as u8).collect();
    let mut block = Vec::with_capacity(lines * (letters + 1));
    for _ in 0..lines {
        block.extend_from_slice(&line);
        block.push(b'\n');
    }
    block
}

fn bench_paint(c: &mut Criterion) {
    let mut group = c.benchmark_group("ColorStream::paint");

    for (lines, letters) in [(1, 10), (1, 240), (10, 10), (10, 240), (100, 240), (500, 500)] {
        let block = text_block(lines, letters);
        group.throughput(Throughput::Bytes(block.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("lines{lines}_let{letters}")),
            &block,
            |b, block| {
                b.iter(|| {
                    let mut stream = ColorStream::new(io::sink(), Some(1));
                    stream.paint(&mut black_box(&block[..])).unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("ColorStream::write");

    let cases = [
        ("newline", "\n".to_string()),
        ("ascii", "abcde".repeat(20) + "\n"),
        ("escapes", "\x1b[1;31mred\x1b[0m plain\x1b[K\n".repeat(10)),
        ("multibyte", "héllo ✂ wörld 🏧\n".repeat(10)),
        ("tabs", "col\tcol\tcol\n".repeat(10)),
    ];
    for (name, data) in cases {
        let mut stream = ColorStream::new(io::sink(), Some(1));
        group.bench_function(name, |b| {
            b.iter(|| stream.write_all(black_box(data.as_bytes())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_paint, bench_write);
criterion_main!(benches);
