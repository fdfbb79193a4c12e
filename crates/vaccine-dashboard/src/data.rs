// File: crates/vaccine-dashboard/src/data.rs
// Summary: Hand-entered COVID-19 vaccine statistics plotted by the dashboard.

/// Vaccine effectiveness (%) measured a number of weeks after vaccination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectivenessSample {
    pub week: u32,
    pub effectiveness: f64,
}

/// Effectiveness by age group; `None` marks a metric not reported for the group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgeGroupRecord {
    pub label: &'static str,
    pub ed_uc: Option<f64>,
    pub hospitalization: Option<f64>,
}

/// Reaction rates and effectiveness (%) per dose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoseRecord {
    pub label: &'static str,
    pub local_reaction: f64,
    pub systemic_reaction: f64,
    pub effectiveness: f64,
}

const fn sample(week: u32, effectiveness: f64) -> EffectivenessSample {
    EffectivenessSample { week, effectiveness }
}

pub const INFECTION: [EffectivenessSample; 3] = [sample(4, 52.2), sample(10, 32.6), sample(20, 20.4)];

pub const HOSPITALIZATION: [EffectivenessSample; 3] = [sample(4, 66.8), sample(10, 57.1), sample(24, 39.2)];

/// Effectiveness against death six months out.
pub const DEATH_6MO: f64 = 64.0;

pub const AGE_GROUPS: [AgeGroupRecord; 5] = [
    AgeGroupRecord { label: "9mo-4yr", ed_uc: Some(76.0), hospitalization: None },
    AgeGroupRecord { label: "5-17yr", ed_uc: Some(56.0), hospitalization: None },
    AgeGroupRecord { label: "18-64yr", ed_uc: Some(33.0), hospitalization: Some(33.0) },
    AgeGroupRecord { label: "65+ IC*", ed_uc: None, hospitalization: Some(45.5) },
    AgeGroupRecord { label: "65+ Comp*", ed_uc: None, hospitalization: Some(40.0) },
];

pub const AGE_GROUP_FOOTNOTE: &str = "*IC: Immunocompetent, Comp: Immunocompromised";

pub const DOSES: [DoseRecord; 4] = [
    DoseRecord { label: "Dose 1", local_reaction: 75.0, systemic_reaction: 55.0, effectiveness: 90.0 },
    DoseRecord { label: "Dose 2", local_reaction: 80.0, systemic_reaction: 65.0, effectiveness: 92.0 },
    DoseRecord { label: "Dose 3", local_reaction: 70.0, systemic_reaction: 60.0, effectiveness: 52.0 },
    DoseRecord { label: "Dose 4", local_reaction: 65.0, systemic_reaction: 55.0, effectiveness: 36.5 },
];

pub const KEY_FINDINGS: &str = "Key Findings:\n\n\
1. Protection against infection wanes quickly\n   (52% -> 20% in 5 months).\n\
2. Protection against severe disease remains\n   robust (>60%).\n\
3. Children (9mo-4yr) show highest initial\n   effectiveness (76%).\n\
4. Side effects peak at Dose 2 and decrease\n   with subsequent boosters.";

/// (week, effectiveness) pairs as plot coordinates.
pub fn as_points(samples: &[EffectivenessSample]) -> Vec<(f64, f64)> {
    samples.iter().map(|s| (f64::from(s.week), s.effectiveness)).collect()
}
