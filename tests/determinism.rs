mod common;

use common::random_genome;
use genetica_lib::model::config::{AppConfig, SequencerConfig};
use genetica_lib::model::sequencer::sequence;
use genetica_lib::model::state::Genome;
use genetica_lib::model::GrnLogic;
use genetica_lib::report::OrganismReport;

#[test]
fn test_sequencing_is_deterministic() {
    let config = AppConfig::default();
    for seed in 0..30 {
        let genome = random_genome(seed, 5);
        let first = sequence(&genome, &config).unwrap();
        let second = sequence(&genome, &config).unwrap();
        assert_eq!(first, second, "seed {seed}");

        let a = serde_json::to_string(&OrganismReport::new(&genome, &first, 0)).unwrap();
        let b = serde_json::to_string(&OrganismReport::new(&genome, &second, 0)).unwrap();
        assert_eq!(a, b, "seed {seed}");
    }
}

#[test]
fn test_ticking_is_deterministic() {
    let genome = random_genome(99, 4);
    let config = AppConfig::default();
    let mut first = sequence(&genome, &config).unwrap();
    let mut second = sequence(&genome, &config).unwrap();
    for _ in 0..50 {
        first.grn.update();
        second.grn.update();
    }
    assert_eq!(first.grn.factor_levels, second.grn.factor_levels);
}

#[test]
fn test_genome_json_round_trip_sequences_identically() {
    let genome = random_genome(3, 4);
    let json = serde_json::to_string(&genome).unwrap();
    let restored: Genome = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.fingerprint(), genome.fingerprint());

    let config = AppConfig::default();
    assert_eq!(
        sequence(&genome, &config).unwrap(),
        sequence(&restored, &config).unwrap()
    );
}

#[test]
fn test_fingerprint_tracks_every_base() {
    let genome = random_genome(11, 2);
    let mut chromosomes: Vec<(u32, String)> = genome
        .iter()
        .map(|(k, c)| (k, c.to_string()))
        .collect();
    let (_, last) = chromosomes.last_mut().unwrap();
    let flipped = if last.ends_with('0') { '1' } else { '0' };
    last.pop();
    last.push(flipped);

    let mutated = Genome::parse(chromosomes.iter().map(|(k, s)| (*k, s.as_str()))).unwrap();
    assert_ne!(mutated.fingerprint(), genome.fingerprint());
}

#[test]
fn test_config_fingerprint_tracks_decoding_switches() {
    let skipping = AppConfig {
        sequencer: SequencerConfig {
            skip_duplicate_angles: true,
        },
        ..Default::default()
    };
    assert_ne!(skipping.fingerprint(), AppConfig::default().fingerprint());
    assert_eq!(
        AppConfig::default().fingerprint(),
        AppConfig::default().fingerprint()
    );
}
