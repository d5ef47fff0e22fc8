use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use streamcomb::Parser;
use streamcomb::character::comma;
use streamcomb::sep_by::sep_by1;
use streamcomb::standard::floating::floating;
use streamcomb::standard::integral::integral;
use streamcomb::streams::TextStream;

fn bench_integral(c: &mut Criterion) {
    let input = "9007199254740991";
    let mut group = c.benchmark_group("integral");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("i64", |b| {
        let parser = integral::<i64>();
        b.iter(|| {
            let mut stream = TextStream::new(input);
            parser.parse(&mut stream)
        })
    });
    group.finish();
}

fn bench_floating(c: &mut Criterion) {
    let input = "-12345.6789e-3";
    let mut group = c.benchmark_group("floating");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("f64", |b| {
        let parser = floating::<f64>();
        b.iter(|| {
            let mut stream = TextStream::new(input);
            parser.parse(&mut stream)
        })
    });
    group.finish();
}

fn bench_number_list(c: &mut Criterion) {
    let input = (0..512).map(|n| n.to_string()).collect::<Vec<_>>().join(",");
    let mut group = c.benchmark_group("list");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("sep_by1 u32", |b| {
        let parser = sep_by1::<Vec<u32>, _, _>(comma(), integral::<u32>());
        b.iter(|| {
            let mut stream = TextStream::new(&input);
            parser.parse(&mut stream)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_integral, bench_floating, bench_number_list);
criterion_main!(benches);
