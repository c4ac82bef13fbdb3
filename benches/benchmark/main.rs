use criterion::criterion_main;

mod common;
#[cfg(feature = "serde")]
mod wire;

#[cfg(feature = "serde")]
criterion_main!(core::core_benches, compose::compose_benches, wire::wire_benches);

#[cfg(not(feature = "serde"))]
criterion_main!(core::core_benches, compose::compose_benches);
