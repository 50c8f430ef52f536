//! Shared fixtures for unit tests.

use data_spi::{Dataset, Schema, SensorSample};

/// Three light sources with clearly separated readings.
pub fn separable(per_class: usize) -> Dataset {
    let mut samples = Vec::new();
    for i in 0..per_class {
        let j = i as f32 * 0.5;
        samples.push(SensorSample::new(900.0 + j, 20.0 + j * 0.1, 5.0 + j * 0.1, "Day"));
        samples.push(SensorSample::new(50.0 + j, 30.0 + j * 0.1, 60.0 + j, "Lamp"));
        samples.push(SensorSample::new(5.0 + j * 0.1, 18.0 + j * 0.1, 1.0 + j * 0.1, "Dark"));
    }
    Dataset::new(Schema::sensor(), samples)
}
