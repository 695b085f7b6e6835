pub mod macros;

use genetica_lib::model::config::AppConfig;
use genetica_lib::model::sequencer::{sequence, CELL_DATA_SIZE, HEADER_SIZE};
use genetica_lib::model::state::{Genome, LifeForm};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `value` as `width` base-4 digits, most significant first.
#[allow(dead_code)]
pub fn digits(value: u32, width: usize) -> String {
    (0..width)
        .rev()
        .map(|i| char::from(b'0' + ((value >> (2 * i)) & 3) as u8))
        .collect()
}

/// One attachment record. `on` and `from` are sixteenths of their ranges.
#[allow(dead_code)]
pub fn record(part: u32, priority: u32, on: u32, from: u32) -> String {
    [
        digits(part, 3),
        digits(priority, 3),
        digits(on, 2),
        digits(from, 2),
    ]
    .concat()
}

/// Additive (`'0'`) or multiplicative (`'1'`) promoter with a positive sign.
#[allow(dead_code)]
pub fn promoter(kind: char, embedding: &str) -> String {
    format!("{kind}3000{embedding}")
}

/// Positive gene with modifier 0.5. `factor` is the factor type base.
#[allow(dead_code)]
pub fn gene(factor: char, embedding: &str) -> String {
    format!("2{factor}3200{embedding}")
}

#[allow(dead_code)]
pub const ORIGIN: &str = "000000000";

#[allow(dead_code)]
pub struct GenomeBuilder {
    symmetry: u8,
    reproduction: u8,
    grn: Vec<String>,
    parts: Vec<(u32, Vec<String>)>,
}

#[allow(dead_code)]
impl GenomeBuilder {
    pub fn new() -> Self {
        Self {
            symmetry: 0,
            reproduction: 0,
            grn: Vec::new(),
            parts: Vec::new(),
        }
    }

    pub fn with_symmetry(mut self, base: u8) -> Self {
        self.symmetry = base;
        self
    }

    pub fn with_reproduction(mut self, base: u8) -> Self {
        self.reproduction = base;
        self
    }

    pub fn with_grn_element(mut self, element: String) -> Self {
        self.grn.push(element);
        self
    }

    /// A segment chromosome with the given attachment records.
    pub fn with_part(mut self, key: u32, records: Vec<String>) -> Self {
        self.parts.push((key, records));
        self
    }

    pub fn build(self) -> Genome {
        let header = format!(
            "{}{}{}{}",
            self.symmetry,
            self.reproduction,
            "1".repeat(HEADER_SIZE - 2),
            self.grn.concat()
        );
        let bodies: Vec<(u32, String)> = self
            .parts
            .into_iter()
            .map(|(key, records)| (key, [records.concat(), "1".repeat(CELL_DATA_SIZE)].concat()))
            .collect();
        let mut chromosomes = vec![(0, header.as_str())];
        chromosomes.extend(bodies.iter().map(|(k, s)| (*k, s.as_str())));
        Genome::parse(chromosomes).unwrap()
    }

    pub fn sequence(self) -> LifeForm {
        sequence(&self.build(), &AppConfig::default()).unwrap()
    }
}

/// A random genome: header plus `parts` body chromosomes of random length.
#[allow(dead_code)]
pub fn random_genome(seed: u64, parts: u32) -> Genome {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut random_bases = |len: usize| -> String {
        (0..len)
            .map(|_| char::from(b'0' + rng.gen_range(0..4u8)))
            .collect()
    };
    let mut chromosomes = vec![(0, random_bases(HEADER_SIZE + 200))];
    for key in 1..=parts {
        let len = CELL_DATA_SIZE + 10 * (key as usize % 6) + 3;
        chromosomes.push((key, random_bases(len)));
    }
    Genome::parse(chromosomes.iter().map(|(k, s)| (*k, s.as_str()))).unwrap()
}
