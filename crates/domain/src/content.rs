//! Seed content - the standard humanoid hit-location set
//!
//! Hosts use this when creating a new character or creature; the test
//! suites use it as a realistic body map. Probability weights follow the
//! humanoid hit-location table (per aim band, summing independently per
//! column); severity tables vary by how vital each location is.

use crate::entities::{ArmorLocationData, Item, ItemKind, ProbWeights};
use crate::value_objects::{Severity, SeverityClass, SeverityTable};

fn severity_table(codes: [(SeverityClass, u8); 5]) -> SeverityTable {
    SeverityTable::new(
        Severity::rated(codes[0].0, codes[0].1),
        Severity::rated(codes[1].0, codes[1].1),
        Severity::rated(codes[2].0, codes[2].1),
        Severity::rated(codes[3].0, codes[3].1),
        Severity::rated(codes[4].0, codes[4].1),
    )
}

struct LocationSpec {
    name: &'static str,
    weights: (u32, u32, u32),
    is_fumble: bool,
    is_stumble: bool,
    is_amputate: bool,
    table: [(SeverityClass, u8); 5],
}

use crate::value_objects::SeverityClass::{Grievous as G, Kill as K, Minor as M, Serious as S};

const HUMANOID: [LocationSpec; 16] = [
    LocationSpec {
        name: "Skull",
        weights: (150, 50, 0),
        is_fumble: false,
        is_stumble: false,
        is_amputate: false,
        table: [(M, 1), (S, 2), (S, 3), (K, 4), (K, 5)],
    },
    LocationSpec {
        name: "Face",
        weights: (150, 50, 0),
        is_fumble: false,
        is_stumble: false,
        is_amputate: false,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (K, 5)],
    },
    LocationSpec {
        name: "Neck",
        weights: (80, 20, 0),
        is_fumble: false,
        is_stumble: false,
        is_amputate: true,
        table: [(M, 1), (S, 2), (S, 3), (K, 4), (K, 5)],
    },
    LocationSpec {
        name: "Shoulder",
        weights: (120, 80, 0),
        is_fumble: true,
        is_stumble: false,
        is_amputate: false,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (G, 5)],
    },
    LocationSpec {
        name: "Upper Arm",
        weights: (60, 80, 0),
        is_fumble: true,
        is_stumble: false,
        is_amputate: true,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (G, 5)],
    },
    LocationSpec {
        name: "Elbow",
        weights: (20, 30, 0),
        is_fumble: true,
        is_stumble: false,
        is_amputate: true,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (G, 5)],
    },
    LocationSpec {
        name: "Forearm",
        weights: (40, 60, 20),
        is_fumble: true,
        is_stumble: false,
        is_amputate: true,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (G, 5)],
    },
    LocationSpec {
        name: "Hand",
        weights: (20, 60, 20),
        is_fumble: true,
        is_stumble: false,
        is_amputate: true,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (G, 5)],
    },
    LocationSpec {
        name: "Thorax",
        weights: (100, 170, 70),
        is_fumble: false,
        is_stumble: false,
        is_amputate: false,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (K, 5)],
    },
    LocationSpec {
        name: "Abdomen",
        weights: (60, 100, 100),
        is_fumble: false,
        is_stumble: false,
        is_amputate: false,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (K, 5)],
    },
    LocationSpec {
        name: "Groin",
        weights: (0, 40, 60),
        is_fumble: false,
        is_stumble: true,
        is_amputate: false,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (G, 5)],
    },
    LocationSpec {
        name: "Hip",
        weights: (0, 30, 70),
        is_fumble: false,
        is_stumble: true,
        is_amputate: false,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (G, 5)],
    },
    LocationSpec {
        name: "Thigh",
        weights: (0, 40, 100),
        is_fumble: false,
        is_stumble: true,
        is_amputate: true,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (G, 5)],
    },
    LocationSpec {
        name: "Knee",
        weights: (0, 10, 40),
        is_fumble: false,
        is_stumble: true,
        is_amputate: true,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (G, 5)],
    },
    LocationSpec {
        name: "Calf",
        weights: (0, 30, 70),
        is_fumble: false,
        is_stumble: true,
        is_amputate: true,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (G, 5)],
    },
    LocationSpec {
        name: "Foot",
        weights: (0, 20, 40),
        is_fumble: false,
        is_stumble: true,
        is_amputate: true,
        table: [(M, 1), (S, 2), (S, 3), (G, 4), (G, 5)],
    },
];

/// The default humanoid hit-location items.
pub fn standard_hit_locations() -> Vec<Item> {
    HUMANOID
        .iter()
        .map(|spec| {
            Item::new(
                spec.name,
                ItemKind::ArmorLocation(ArmorLocationData {
                    prob_weight: ProbWeights::new(
                        spec.weights.0,
                        spec.weights.1,
                        spec.weights.2,
                    ),
                    is_fumble: spec.is_fumble,
                    is_stumble: spec.is_stumble,
                    is_amputate: spec.is_amputate,
                    severity_table: severity_table(spec.table),
                    ..ArmorLocationData::default()
                }),
            )
        })
        .collect()
}
