use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// Sample launch-records generator
// ---------------------------------------------------------------------------
//
// Writes a deterministic `launch_records.csv` so the dashboard can run
// without the upstream dataset. Same schema as the real export, including
// the extra Flight Number column the dashboard ignores.

const OUTPUT: &str = "launch_records.csv";
const N_LAUNCHES: usize = 120;

/// Minimal deterministic PRNG (splitmix64)
struct SampleRng(u64);

impl SampleRng {
    fn new(seed: u64) -> Self {
        SampleRng(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    fn in_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster generation flown on the given flight, by era.
fn booster_category(flight: usize) -> &'static str {
    match flight {
        0..=4 => "v1.0",
        5..=19 => "v1.1",
        20..=59 => "FT",
        60..=79 => "B4",
        _ => "B5",
    }
}

fn main() -> Result<()> {
    let mut rng = SampleRng::new(42);

    let sites = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

    let mut writer = csv::Writer::from_path(OUTPUT).context("creating output CSV")?;
    writer.write_record([
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version Category",
    ])?;

    for flight in 0..N_LAUNCHES {
        // Pads came online over time; the earliest flights all share one.
        let site = if flight < 8 {
            "CCAFS LC-40"
        } else {
            *rng.pick(&sites)
        };

        // Payload bands: light rideshares, resupply runs, heavy GTO birds.
        let payload = if rng.chance(0.15) {
            rng.in_range(300.0, 1500.0)
        } else if rng.chance(0.5) {
            rng.in_range(1800.0, 6500.0)
        } else {
            rng.in_range(6500.0, 15_600.0)
        };
        let payload = (payload / 10.0).round() * 10.0;

        // Landing success improved as the program matured.
        let p_success = 0.35 + 0.55 * (flight as f64 / N_LAUNCHES as f64);
        let class = if rng.chance(p_success) { 1 } else { 0 };

        writer.write_record([
            (flight + 1).to_string(),
            site.to_string(),
            class.to_string(),
            format!("{payload:.1}"),
            booster_category(flight).to_string(),
        ])?;
    }

    writer.flush().context("flushing output CSV")?;
    println!("Wrote {N_LAUNCHES} launches to {OUTPUT}");
    Ok(())
}
