use criterion::Criterion;
use outcome_rail::Error;
use std::time::Duration;

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_secs(1))
        .sample_size(100)
}

/// Error tree with `width` children, each holding `width` leaves.
pub fn wide_error(width: usize) -> Error {
    let mut root = Error::with_id("batch import failed", 500);
    for i in 0..width {
        let leaves: Vec<String> = (0..width).map(|j| format!("row {i}.{j} rejected")).collect();
        root.add_error_detail(Error::with_details(format!("chunk {i}"), leaves));
    }
    root
}
