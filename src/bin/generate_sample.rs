use anyhow::{Context, Result};
use serde::Serialize;

/// One output row, in the column order of the launch records export.
#[derive(Serialize)]
struct LaunchRow<'a> {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'a str,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'a str,
}

/// Booster generation: category, flights flown, payload mean/spread,
/// success probability and the sites it launched from.
struct Era {
    category: &'static str,
    flights: u32,
    payload_mean: f64,
    payload_sd: f64,
    success_rate: f64,
    sites: &'static [&'static str],
}

const ERAS: [Era; 5] = [
    Era {
        category: "v1.0",
        flights: 5,
        payload_mean: 300.0,
        payload_sd: 250.0,
        success_rate: 0.2,
        sites: &["CCAFS LC-40"],
    },
    Era {
        category: "v1.1",
        flights: 15,
        payload_mean: 2500.0,
        payload_sd: 1200.0,
        success_rate: 0.35,
        sites: &["CCAFS LC-40", "VAFB SLC-4E"],
    },
    Era {
        category: "FT",
        flights: 24,
        payload_mean: 4500.0,
        payload_sd: 1800.0,
        success_rate: 0.65,
        sites: &["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"],
    },
    Era {
        category: "B4",
        flights: 11,
        payload_mean: 5000.0,
        payload_sd: 2000.0,
        success_rate: 0.45,
        sites: &["KSC LC-39A", "CCAFS SLC-40", "VAFB SLC-4E"],
    },
    Era {
        category: "B5",
        flights: 1,
        payload_mean: 3600.0,
        payload_sd: 0.0,
        success_rate: 1.0,
        sites: &["CCAFS SLC-40"],
    },
];

/// Upper bound for generated payloads, the top of the dashboard's range control.
const MAX_PAYLOAD_KG: f64 = 10_000.0;

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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        let idx = (self.next_u64() % items.len() as u64) as usize;
        items[idx]
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut flight_number = 0u32;
    for era in &ERAS {
        for serial in 0..era.flights {
            flight_number += 1;
            let payload = rng
                .gauss(era.payload_mean, era.payload_sd)
                .clamp(0.0, MAX_PAYLOAD_KG)
                .round();
            let class = u8::from(rng.next_f64() < era.success_rate);

            writer
                .serialize(LaunchRow {
                    flight_number,
                    launch_site: rng.pick(era.sites),
                    class,
                    payload_mass_kg: payload,
                    booster_version: format!("F9 {} B{}", era.category, 1000 + serial),
                    booster_version_category: era.category,
                })
                .with_context(|| format!("writing flight {flight_number}"))?;
        }
    }

    writer.flush().context("flushing CSV")?;

    println!("Wrote {flight_number} launches to {output_path}");
    Ok(())
}
