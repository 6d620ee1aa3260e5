// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use contrib_feed::{Contributor, ContributorCollection, GridLayout, render_grid};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn collection(count: usize,) -> ContributorCollection
{
    (0..count)
        .map(|i| Contributor {
            login:      format!("user{i}"),
            avatar_url: format!("https://avatars.githubusercontent.com/u/{i}?v=4"),
        },)
        .collect()
}

fn benchmark_render_small(c: &mut Criterion,)
{
    let contributors = collection(13,);

    c.bench_function("render_grid_13", |b| b.iter(|| render_grid(black_box(&contributors,),),),);
}

fn benchmark_render_two_pages(c: &mut Criterion,)
{
    let contributors = collection(137,);

    c.bench_function("render_grid_137", |b| b.iter(|| render_grid(black_box(&contributors,),),),);
}

fn benchmark_render_large(c: &mut Criterion,)
{
    let contributors = collection(5000,);

    c.bench_function("render_grid_5000", |b| b.iter(|| render_grid(black_box(&contributors,),),),);
}

fn benchmark_layout(c: &mut Criterion,)
{
    let contributors = collection(1000,);

    c.bench_function("layout_cells_1000", |b| {
        b.iter(|| {
            let layout = GridLayout::for_count(black_box(contributors.len(),),);
            black_box(layout.cells(&contributors,).count(),)
        },)
    },);
}

criterion_group!(
    benches,
    benchmark_render_small,
    benchmark_render_two_pages,
    benchmark_render_large,
    benchmark_layout
);
criterion_main!(benches);
