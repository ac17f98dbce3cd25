use burrito_menu::{PortionSize, PriceTable, Protein, Size, StandardMenu, Topping};
use burrito_order::{BurritoBuilder, CustomBurritoBuilder, ObservableBurrito, VeggieBurritoBuilder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn loaded_builder() -> CustomBurritoBuilder {
    let mut builder = CustomBurritoBuilder::new();
    builder.size(Size::Jumbo);
    for topping in Topping::ALL {
        builder.add_topping(topping, PortionSize::Extra);
    }
    for protein in Protein::ALL {
        builder.add_protein(protein, PortionSize::Less);
    }
    builder
}

fn bench_build(c: &mut Criterion) {
    let builder = loaded_builder();
    c.bench_function("build_full_custom", |b| b.iter(|| black_box(&builder).build()));
    c.bench_function("build_veggie", |b| {
        b.iter(|| VeggieBurritoBuilder::new().size(black_box(Size::Normal)).build())
    });
}

fn bench_cost(c: &mut Criterion) {
    let burrito = loaded_builder().build().expect("size is set");
    let table = PriceTable::standard()
        .with_multiplier(PortionSize::Extra, 1.5)
        .expect("valid multiplier");

    c.bench_function("cost_standard_menu", |b| b.iter(|| black_box(&burrito).cost_with(&StandardMenu)));
    c.bench_function("cost_price_table", |b| b.iter(|| black_box(&burrito).cost_with(&table)));
}

criterion_group!(benches, bench_build, bench_cost);
criterion_main!(benches);
