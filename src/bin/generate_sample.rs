//! Writes a synthetic FIRMS export (preamble, header, 21-column rows) so the
//! viewer can be tried without the real government file.
//!
//! Usage: `generate_sample [OUTPUT] [ROWS]` (defaults: `data/firms_codes.csv`, 500).

use std::path::PathBuf;

use anyhow::{Context, Result};
use firms_finder::data::model::{FACILITY_TYPES, STATUSES};

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

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

const CITIES: &[(&str, &str, &str, &str)] = &[
    ("2704", "Los Angeles", "CA", "900"),
    ("2709", "Long Beach", "CA", "908"),
    ("5501", "Dallas", "TX", "752"),
    ("5301", "Houston", "TX", "770"),
    ("1001", "New York", "NY", "100"),
    ("3901", "Chicago", "IL", "606"),
    ("5201", "Miami", "FL", "331"),
    ("3002", "Seattle", "WA", "981"),
];

const NAME_WORDS: &[&str] = &[
    "Pacific", "Harbor", "Relax", "Alpha", "Gateway", "Summit", "Bay", "Union",
    "Coastal", "Metro", "Atlas", "Pioneer",
];

const NAME_SUFFIXES: &[&str] = &[
    "Logistics",
    "Storage",
    "Terminal",
    "Freight",
    "Warehousing Inc.",
];

const STREETS: &[&str] = &[
    "Dock St",
    "Harbor Blvd",
    "Industrial Way",
    "Elm Ave.",
    "Terminal Island Rd",
];

const HEADER: [&str; 21] = [
    "District Port Code",
    "FIRMS Code",
    "FIRMS Name",
    "FIRMS Status",
    "Bond Type",
    "Operator",
    "Facility Type",
    "Activation Date",
    "Deactivation Date",
    "Street Address",
    "Address Line 2",
    "Contact Name",
    "Contact Phone",
    "Contact Email",
    "Latitude",
    "Longitude",
    "Remarks",
    "City",
    "State",
    "Zip",
    "Country",
];

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output = PathBuf::from(args.next().unwrap_or_else(|| "data/firms_codes.csv".into()));
    let rows: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid row count {n:?}"))?,
        None => 500,
    };

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&output)
        .with_context(|| format!("creating {}", output.display()))?;

    // Preamble rows, as in the published spreadsheet.
    writer.write_record(["Facilities Information Resources Management System (FIRMS)"])?;
    writer.write_record(["Updated Firm Codes", "synthetic sample"])?;
    writer.write_record([""])?;
    writer.write_record(HEADER)?;

    let mut rng = SimpleRng::new(42);
    let letters = b"ABCDEFGHJKLMNPRSTVWXYZ";

    for i in 0..rows {
        let (port, city, state, zip_prefix) = CITIES[rng.below(CITIES.len())];
        let code = format!("{}{:03}", letters[rng.below(letters.len())] as char, i % 1000);
        let name = format!("{} {}", rng.pick(NAME_WORDS), rng.pick(NAME_SUFFIXES));
        let street = format!("{} {}", 1 + rng.below(9999), rng.pick(STREETS));
        let zip = format!("{zip_prefix}{:02}", rng.below(100));

        let mut row = vec![String::new(); HEADER.len()];
        row[0] = port.to_string();
        row[1] = code;
        row[2] = name;
        row[3] = rng.pick(STATUSES).to_string();
        row[6] = rng.pick(FACILITY_TYPES).to_string();
        row[9] = street;
        row[17] = city.to_string();
        row[18] = state.to_string();
        row[19] = zip;
        row[20] = "US".to_string();

        // Every so often, emulate the data-quality gaps of the real export.
        if i % 97 == 0 {
            row[6].clear();
        }
        if i % 89 == 0 {
            row[2] = format!("{}\nSuite {}", row[2], rng.below(400));
        }

        writer.write_record(&row)?;
    }
    writer.flush()?;

    println!("Wrote {rows} facility rows to {}", output.display());
    Ok(())
}
