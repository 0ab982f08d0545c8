use std::path::Path;

use anyhow::{Context, Result};

/// Countries with a rough baseline prevalence (%) and yearly drift.
const COUNTRIES: &[(&str, f64, f64)] = &[
    ("Yemen", 68.0, -0.35),
    ("Mali", 59.0, -0.20),
    ("Niger", 61.0, -0.10),
    ("Chad", 50.0, 0.15),
    ("Gambia", 57.0, -0.40),
    ("Senegal", 55.0, -0.30),
    ("Nigeria", 56.0, -0.05),
    ("Burkina Faso", 58.0, -0.25),
    ("Guinea", 52.0, 0.05),
    ("Mauritania", 46.0, 0.30),
    ("India", 52.0, 0.10),
    ("Pakistan", 50.0, -0.15),
    ("Afghanistan", 44.0, 0.20),
    ("Bangladesh", 43.0, -0.20),
    ("Cameroon", 45.0, -0.10),
    ("Congo", 48.0, 0.00),
    ("Benin", 53.0, -0.35),
    ("Togo", 51.0, -0.15),
    ("Sierra Leone", 54.0, -0.30),
    ("Liberia", 47.0, -0.10),
    ("Mozambique", 50.0, 0.05),
    ("Madagascar", 38.0, 0.25),
    ("Haiti", 46.0, -0.05),
    ("Cambodia", 49.0, -0.30),
    ("Laos", 40.0, -0.10),
    ("Peru", 21.0, -0.05),
    ("Brazil", 16.0, -0.10),
    ("Egypt", 28.0, 0.05),
    ("Iraq", 29.0, 0.10),
    ("Sudan", 37.0, 0.15),
];

const FIRST_YEAR: i32 = 2000;
const LAST_YEAR: i32 = 2019;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let output_path = Path::new("DataSources/Interpolated_Data_Anemia.csv");
    if let Some(dir) = output_path.parent() {
        std::fs::create_dir_all(dir).context("creating output directory")?;
    }

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer.write_record(["TIME_PERIOD", "REF_AREA_LABEL", "OBS_VALUE"])?;

    let mut rows = 0usize;
    for year in FIRST_YEAR..=LAST_YEAR {
        let t = (year - FIRST_YEAR) as f64;
        for &(country, base, drift) in COUNTRIES {
            let value = (base + drift * t + rng.gauss(0.0, 0.8)).clamp(0.0, 100.0);
            writer.write_record([
                year.to_string(),
                country.to_string(),
                format!("{value:.2}"),
            ])?;
            rows += 1;
        }
    }
    writer.flush().context("writing output file")?;

    println!(
        "Wrote {rows} rows ({} countries, {FIRST_YEAR}-{LAST_YEAR}) to {}",
        COUNTRIES.len(),
        output_path.display()
    );
    Ok(())
}
