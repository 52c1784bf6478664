// Shared fixture documents for the integration tests
#![allow(dead_code)]

use std::path::Path;

use paddock::dataset::{Collection, Dataset, MemorySource, load_blocking};

pub const METADATA: &str = r##"{
    "years": ["2010", "2011", "2012", "2013", 2020, 2021],
    "drivers": [
        {"name": "Max Verstappen", "races": 141, "firstYear": 2015, "lastYear": 2021},
        {"name": "Lewis Hamilton", "races": 288, "firstYear": 2007, "lastYear": 2021},
        {"name": "Valtteri Bottas", "races": 178, "firstYear": 2013, "lastYear": 2021},
        {"name": "Nikita Mazepin", "races": 21, "firstYear": 2021, "lastYear": 2021}
    ],
    "constructors": [
        {"name": "Red Bull", "races": 325, "color": "#0600EF"},
        {"name": "Ferrari", "races": 1040, "color": "#DC0000"},
        {"name": "Mercedes", "races": 251, "color": "#00D2BE"}
    ],
    "circuits": [
        {"name": "Monza", "races": 71},
        {"name": "Monaco", "races": 67},
        {"name": "Indianapolis", "races": 19}
    ],
    "teamColors": {"Red Bull": "#0600EF", "Ferrari": "#DC0000", "Mercedes": "#00D2BE"},
    "driverConstructorMap": {
        "2021": {"Max Verstappen": "Red Bull", "Lewis Hamilton": "Mercedes"}
    }
}"##;

pub const CHAMPIONSHIP_BATTLES: &str = r#"{
    "2020": {
        "rounds": [1, 2],
        "drivers": {
            "Lewis Hamilton": {"code": "HAM", "points": {"1": 25, "2": 347}, "positions": {"1": 1, "2": 1}, "wins": 11}
        }
    },
    "2021": {
        "rounds": [1, 2, 3],
        "drivers": {
            "Lewis Hamilton": {"code": "HAM", "ref": "hamilton", "points": {"1": 25, "2": 44, "3": 387.5}, "positions": {"1": 1, "2": 2, "3": 2}, "wins": 8},
            "Max Verstappen": {"code": "VER", "ref": "max_verstappen", "points": {"1": 18, "2": 43, "3": 395.5}, "positions": {"1": 2, "2": 1, "3": 1}, "wins": 10},
            "Nikita Mazepin": {"code": "MAZ", "points": {"1": 0}, "positions": {"1": null}, "wins": 0},
            "Valtteri Bottas": {"code": "BOT", "points": {"1": 16, "3": 226}, "positions": {"1": 3, "3": 3}, "wins": 1}
        }
    }
}"#;

pub const CONSTRUCTOR_DOMINANCE: &str = r#"{
    "years": ["2010", "2011", "2012", "2013"],
    "shares": {
        "2010": {"Red Bull": 40.0, "Ferrari": 20.0, "Mercedes": 5.0},
        "2011": {"Red Bull": 45.0, "Ferrari": 15.0, "Mercedes": 5.0},
        "2012": {"Red Bull": 40.0, "Ferrari": 20.0, "Mercedes": 5.0, "Lotus": 10.0},
        "2013": {"Red Bull": 45.0, "Ferrari": 15.0, "Mercedes": 5.0}
    },
    "entropy": {"2010": 2.91, "2011": 2.64, "2013": 2.71},
    "topConstructors": ["Red Bull", "Ferrari"]
}"#;

pub const GRID_VS_RACE: &str = r#"{
    "perSeason": {
        "2020": [
            {"g": 1, "f": 1, "pg": 0, "d": "Lewis Hamilton", "c": "Mercedes", "ci": "Monza"}
        ],
        "2021": [
            {"g": 2, "f": 1, "pg": 1, "d": "Max Verstappen", "c": "Red Bull", "ci": "Monza"},
            {"g": 1, "f": 2, "pg": -1, "d": "Lewis Hamilton", "c": "Mercedes", "ci": "Monza"},
            {"g": 20, "f": 17, "pg": 3, "d": "Nikita Mazepin", "c": "Haas", "ci": "Monaco"},
            {"g": 5, "f": 4, "pg": 1, "d": "Valtteri Bottas", "c": "Mercedes", "ci": "Monaco"}
        ]
    },
    "avgPositionsGained": {"Nikita Mazepin": -0.8, "Max Verstappen": 1.2}
}"#;

pub const CIRCUITS: &str = r#"{
    "Indianapolis": {"circuitId": 19, "country": "USA", "location": "Indianapolis", "racesHosted": 19,
                     "dnfRate": 28.4, "avgLapMs": 73000, "lapVariance": 3100, "years": [1950, 2007]},
    "Monaco": {"circuitId": 6, "country": "Monaco", "location": "Monte-Carlo", "racesHosted": 67,
               "dnfRate": 41.2, "avgLapMs": null, "lat": 43.7347, "lng": 7.42056, "years": [1950, 2021]},
    "Monza": {"circuitId": 14, "country": "Italy", "location": "Monza", "racesHosted": 71,
              "dnfRate": 33.0, "avgLapMs": 91500, "lapVariance": 2250, "lat": 45.6156, "lng": 9.28111,
              "years": [1950, 1951, 2021]}
}"#;

pub const PIT_STOPS: &str = r#"{
    "medianPerSeason": {"2021": 23500, "2019": 24500, "2020": 24000},
    "distribution": {"2020": [22000, 24000, 26000], "2021": [23000, 23500]},
    "constructorStats": {
        "Ferrari": {"count": 50, "min": 21000, "q1": 22000, "median": 23000, "q3": 24500, "max": 27000},
        "Haas": {"count": 49, "min": 19000, "q1": 19500, "median": 20000, "q3": 21000, "max": 22000},
        "Mercedes": {"count": 200, "min": 20500, "q1": 21800, "median": 22800, "q3": 23900, "max": 26000},
        "Red Bull": {"count": 120, "min": 20000, "q1": 21500, "median": 22500, "q3": 23500, "max": 25500}
    }
}"#;

pub fn documents() -> [(Collection, &'static str); 6] {
    [
        (Collection::Metadata, METADATA),
        (Collection::ChampionshipBattles, CHAMPIONSHIP_BATTLES),
        (Collection::ConstructorDominance, CONSTRUCTOR_DOMINANCE),
        (Collection::GridVsRace, GRID_VS_RACE),
        (Collection::Circuits, CIRCUITS),
        (Collection::PitStops, PIT_STOPS),
    ]
}

pub fn memory_source() -> MemorySource {
    documents()
        .into_iter()
        .fold(MemorySource::new(), |source, (collection, document)| {
            source.with_document(collection, document)
        })
}

pub fn write_fixture_dir(dir: &Path) {
    for (collection, document) in documents() {
        std::fs::write(dir.join(collection.file_name()), document).unwrap();
    }
}

pub fn dataset() -> Dataset {
    load_blocking(&memory_source()).unwrap()
}
