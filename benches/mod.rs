use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    dispatch::bench_switch_get,
    dispatch::bench_all_sensors_get,
    dispatch::bench_led_put
);
criterion_main!(benches);
