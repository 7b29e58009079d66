//! Schedule documents used across harnesses.

use cynosure_core::Catalog;
use std::path::PathBuf;

/// A small festival covering both days, a shared "Both" event, a restricted
/// event, an untimed event and lenient field shapes.
pub const FESTIVAL_JSON: &str = r#"{
  "events": [
    {
      "event_name": "Inter-House Basketball",
      "domain": "Sports",
      "date": "2025-09-26",
      "time": "10:00 AM",
      "venue": "Main Court",
      "age_category": "9th to 12th",
      "teacher_in_charge": "Mr. Rao",
      "restricted": false,
      "capacity_schools": 8,
      "participants_per_school": 5,
      "categories": ["Boys", "Girls"],
      "category_participants": {"Boys": 5, "Girls": 5}
    },
    {
      "event_name": "Creative Writing",
      "domain": "Literary",
      "date": "2025-09-27",
      "time": "09:00 AM",
      "venue": "Library",
      "age_category": "6th-8th",
      "restricted": true,
      "brochure_extract": "Prompt revealed on the spot.\nNo devices."
    },
    {
      "event_name": "Startup Pitch",
      "domain": "Commerce",
      "date": "Both",
      "age_category": "9th to 12th",
      "teacher_in_charge": "Ms. Iyer",
      "capacity_schools": "",
      "categories": ["Seniors"]
    },
    {
      "event_name": "Battle of Bands",
      "domain": "Performing Arts",
      "date": "2025-09-26",
      "time": "02:30 PM",
      "venue": "Auditorium",
      "restricted": "yes",
      "participants_per_school": "6-8",
      "category_participants": {"Band": "6-8 members"}
    },
    {
      "event_name": "Art Expo",
      "domain": "Fine Arts",
      "date": "Both",
      "venue": "Gallery",
      "time": null
    }
  ]
}
"#;

pub fn festival() -> Catalog {
    Catalog::from_json_str(FESTIVAL_JSON).expect("fixture must parse")
}

/// Write [`FESTIVAL_JSON`] into `dir` and return the file path.
pub fn write_festival(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("data.json");
    std::fs::write(&path, FESTIVAL_JSON).expect("write fixture");
    path
}

pub const DAYS: [&str; 2] = ["2025-09-26", "2025-09-27"];
