//! CVSS v4.0 base score.
//!
//! A vector is mapped to a macrovector of six equivalence levels (EQ1..EQ6).
//! The macrovector's score comes from the published lookup table; the final
//! score interpolates towards the next lower macrovectors according to how far
//! the vector sits from the highest severity vectors of its own macrovector.
//!
//! Only base metrics are read. Exploit maturity is taken as Attacked and the
//! security requirements as High, which are their "not defined" values.

mod lookup;
mod vector;

pub use lookup::macrovector_score;
pub use vector::ParsedVector;

use domain::catalog::MetricId;
use domain::{BaseScorer, ScoringError};

const EXPLOIT_MATURITY: char = 'A';
const SECURITY_REQUIREMENT: char = 'H';

/// Unit of the severity distances
const STEP: f64 = 0.1;

/// Macrovector equivalence levels, EQ1 first
pub type MacroVector = [u8; 6];

/// Metrics that take part in the severity distance, grouped per EQ:
/// EQ1 `0..3`, EQ2 `3..5`, EQ3+EQ6 `5..11`, EQ4 `11..14`
const DISTANCE_METRICS: [&str; 14] = [
    "AV", "PR", "UI", "AC", "AT", "VC", "VI", "VA", "CR", "IR", "AR", "SC", "SI", "SA",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct CvssV4Scorer;

impl CvssV4Scorer {
    pub fn new() -> Self {
        Self
    }

    /// Score an already validated vector
    pub fn score_parsed(&self, vector: &ParsedVector) -> f64 {
        let impact = [
            MetricId::VulnerableConfidentiality,
            MetricId::VulnerableIntegrity,
            MetricId::VulnerableAvailability,
            MetricId::SubsequentConfidentiality,
            MetricId::SubsequentIntegrity,
            MetricId::SubsequentAvailability,
        ];
        if impact.iter().all(|m| vector.get(*m) == 'N') {
            return 0.0;
        }

        let macro_vector = macro_vector(vector);
        let Some(mut value) = macrovector_score(macro_vector) else {
            tracing::warn!(?macro_vector, "Macrovector missing from lookup table");
            return 0.0;
        };

        let [eq1, eq2, eq3, eq4, eq5, eq6] = macro_vector;
        let lower = |levels: MacroVector| macrovector_score(levels);

        let eq1_next = lower([eq1 + 1, eq2, eq3, eq4, eq5, eq6]);
        let eq2_next = lower([eq1, eq2 + 1, eq3, eq4, eq5, eq6]);
        let eq3_eq6_next = match (eq3, eq6) {
            (0, 0) => {
                let left = lower([eq1, eq2, eq3, eq4, eq5, eq6 + 1]);
                let right = lower([eq1, eq2, eq3 + 1, eq4, eq5, eq6]);
                match (left, right) {
                    (Some(l), Some(r)) if l > r => Some(l),
                    (_, r) => r,
                }
            }
            (0, 1) | (1, 1) => lower([eq1, eq2, eq3 + 1, eq4, eq5, eq6]),
            (1, 0) => lower([eq1, eq2, eq3, eq4, eq5, eq6 + 1]),
            _ => lower([eq1, eq2, eq3 + 1, eq4, eq5, eq6 + 1]),
        };
        let eq4_next = lower([eq1, eq2, eq3, eq4 + 1, eq5, eq6]);
        let eq5_next = lower([eq1, eq2, eq3, eq4, eq5 + 1, eq6]);

        let distance = severity_distance(vector, macro_vector);

        let proportional = [
            (eq1_next, distance.eq1, max_severity_eq1(eq1)),
            (eq2_next, distance.eq2, max_severity_eq2(eq2)),
            (eq3_eq6_next, distance.eq3_eq6, max_severity_eq3_eq6(eq3, eq6)),
            (eq4_next, distance.eq4, max_severity_eq4(eq4)),
        ];

        let mut existing_lower = 0u32;
        let mut total = 0.0;
        for (next, current, max_severity) in proportional {
            if let Some(next) = next {
                existing_lower += 1;
                let available = value - next;
                total += available * (current / (max_severity * STEP));
            }
        }
        // EQ5 counts towards the mean but its proportion is always 0
        if eq5_next.is_some() {
            existing_lower += 1;
        }

        if existing_lower > 0 {
            value -= total / f64::from(existing_lower);
        }

        round_one_decimal(value.clamp(0.0, 10.0))
    }
}

impl BaseScorer for CvssV4Scorer {
    fn score(&self, vector: &str) -> Result<f64, ScoringError> {
        let parsed = ParsedVector::parse(vector)?;
        let score = self.score_parsed(&parsed);
        tracing::debug!(vector, score, "Scored CVSS v4.0 vector");
        Ok(score)
    }
}

/// Half-up rounding to one decimal
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

fn metric_value(vector: &ParsedVector, code: &str) -> char {
    match code {
        "E" => EXPLOIT_MATURITY,
        "CR" | "IR" | "AR" => SECURITY_REQUIREMENT,
        other => MetricId::from_code(other)
            .map(|m| vector.get(m))
            .unwrap_or(' '),
    }
}

pub fn macro_vector(vector: &ParsedVector) -> MacroVector {
    let v = |code: &str| metric_value(vector, code);

    let eq1 = match (v("AV"), v("PR"), v("UI")) {
        ('N', 'N', 'N') => 0,
        (av, pr, ui) if (av == 'N' || pr == 'N' || ui == 'N') && av != 'P' => 1,
        _ => 2,
    };

    let eq2 = if v("AC") == 'L' && v("AT") == 'N' { 0 } else { 1 };

    let eq3 = if v("VC") == 'H' && v("VI") == 'H' {
        0
    } else if v("VC") == 'H' || v("VI") == 'H' || v("VA") == 'H' {
        1
    } else {
        2
    };

    // EQ4 level 0 needs a Safety value, which only modified metrics carry
    let eq4 = if [v("SC"), v("SI"), v("SA")].contains(&'H') {
        1
    } else {
        2
    };

    let eq5 = match v("E") {
        'A' => 0,
        'P' => 1,
        _ => 2,
    };

    let eq6 = if (v("CR") == 'H' && v("VC") == 'H')
        || (v("IR") == 'H' && v("VI") == 'H')
        || (v("AR") == 'H' && v("VA") == 'H')
    {
        0
    } else {
        1
    };

    [eq1, eq2, eq3, eq4, eq5, eq6]
}

/// Severity level of a metric value, in distance units of 0.1
fn level(code: &str, value: char) -> f64 {
    match (code, value) {
        ("AV", 'N') => 0.0,
        ("AV", 'A') => 0.1,
        ("AV", 'L') => 0.2,
        ("AV", 'P') => 0.3,
        ("PR", 'N') => 0.0,
        ("PR", 'L') => 0.1,
        ("PR", 'H') => 0.2,
        ("UI", 'N') => 0.0,
        ("UI", 'P') => 0.1,
        ("UI", 'A') => 0.2,
        ("AC", 'L') => 0.0,
        ("AC", 'H') => 0.1,
        ("AT", 'N') => 0.0,
        ("AT", 'P') => 0.1,
        ("VC" | "VI" | "VA", 'H') => 0.0,
        ("VC" | "VI" | "VA", 'L') => 0.1,
        ("VC" | "VI" | "VA", 'N') => 0.2,
        ("SC", 'H') => 0.1,
        ("SC", 'L') => 0.2,
        ("SC", 'N') => 0.3,
        ("SI" | "SA", 'S') => 0.0,
        ("SI" | "SA", 'H') => 0.1,
        ("SI" | "SA", 'L') => 0.2,
        ("SI" | "SA", 'N') => 0.3,
        ("CR" | "IR" | "AR", 'H') => 0.0,
        ("CR" | "IR" | "AR", 'M') => 0.1,
        ("CR" | "IR" | "AR", 'L') => 0.2,
        _ => 0.0,
    }
}

fn max_composed_eq1(eq1: u8) -> &'static [&'static str] {
    match eq1 {
        0 => &["AV:N/PR:N/UI:N/"],
        1 => &["AV:A/PR:N/UI:N/", "AV:N/PR:L/UI:N/", "AV:N/PR:N/UI:P/"],
        _ => &["AV:P/PR:N/UI:N/", "AV:A/PR:L/UI:P/"],
    }
}

fn max_composed_eq2(eq2: u8) -> &'static [&'static str] {
    match eq2 {
        0 => &["AC:L/AT:N/"],
        _ => &["AC:H/AT:N/", "AC:L/AT:P/"],
    }
}

fn max_composed_eq3_eq6(eq3: u8, eq6: u8) -> &'static [&'static str] {
    match (eq3, eq6) {
        (0, 0) => &["VC:H/VI:H/VA:H/CR:H/IR:H/AR:H/"],
        (0, _) => &[
            "VC:H/VI:H/VA:L/CR:M/IR:M/AR:H/",
            "VC:H/VI:H/VA:H/CR:M/IR:M/AR:M/",
        ],
        (1, 0) => &[
            "VC:L/VI:H/VA:H/CR:H/IR:H/AR:H/",
            "VC:H/VI:L/VA:H/CR:H/IR:H/AR:H/",
        ],
        (1, _) => &[
            "VC:L/VI:H/VA:L/CR:H/IR:M/AR:H/",
            "VC:L/VI:H/VA:H/CR:H/IR:M/AR:M/",
            "VC:H/VI:L/VA:H/CR:M/IR:H/AR:M/",
            "VC:H/VI:L/VA:L/CR:M/IR:H/AR:H/",
            "VC:L/VI:L/VA:H/CR:H/IR:H/AR:M/",
        ],
        _ => &["VC:L/VI:L/VA:L/CR:H/IR:H/AR:H/"],
    }
}

fn max_composed_eq4(eq4: u8) -> &'static [&'static str] {
    match eq4 {
        0 => &["SC:H/SI:S/SA:S/"],
        1 => &["SC:H/SI:H/SA:H/"],
        _ => &["SC:L/SI:L/SA:L/"],
    }
}

fn max_severity_eq1(eq1: u8) -> f64 {
    match eq1 {
        0 => 1.0,
        1 => 4.0,
        _ => 5.0,
    }
}

fn max_severity_eq2(eq2: u8) -> f64 {
    match eq2 {
        0 => 1.0,
        _ => 2.0,
    }
}

fn max_severity_eq3_eq6(eq3: u8, eq6: u8) -> f64 {
    match (eq3, eq6) {
        (0, 0) => 7.0,
        (0, _) => 6.0,
        (1, _) => 8.0,
        _ => 10.0,
    }
}

fn max_severity_eq4(eq4: u8) -> f64 {
    match eq4 {
        0 => 6.0,
        1 => 5.0,
        _ => 4.0,
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct SeverityDistance {
    eq1: f64,
    eq2: f64,
    eq3_eq6: f64,
    eq4: f64,
}

fn parts(composed: &'static str) -> impl Iterator<Item = (&'static str, char)> {
    composed
        .split('/')
        .filter_map(|part| part.split_once(':'))
        .filter_map(|(code, value)| value.chars().next().map(|c| (code, c)))
}

/// Distance from the first highest severity vector of the macrovector that
/// the scored vector does not exceed on any metric
fn severity_distance(vector: &ParsedVector, macro_vector: MacroVector) -> SeverityDistance {
    let [eq1, eq2, eq3, eq4, _, eq6] = macro_vector;

    let mut candidate = SeverityDistance::default();
    for &a in max_composed_eq1(eq1) {
        for &b in max_composed_eq2(eq2) {
            for &c in max_composed_eq3_eq6(eq3, eq6) {
                for &d in max_composed_eq4(eq4) {
                    let max: Vec<(&str, char)> =
                        parts(a).chain(parts(b)).chain(parts(c)).chain(parts(d)).collect();
                    let distance = |code: &str| {
                        let max_value = max
                            .iter()
                            .find(|(c, _)| *c == code)
                            .map(|(_, v)| *v)
                            .unwrap_or(' ');
                        level(code, metric_value(vector, code)) - level(code, max_value)
                    };

                    let per_metric: Vec<f64> =
                        DISTANCE_METRICS.iter().map(|code| distance(code)).collect();

                    candidate = SeverityDistance {
                        eq1: per_metric[0..3].iter().sum(),
                        eq2: per_metric[3..5].iter().sum(),
                        eq3_eq6: per_metric[5..11].iter().sum(),
                        eq4: per_metric[11..14].iter().sum(),
                    };

                    if per_metric.iter().all(|d| *d >= 0.0) {
                        return candidate;
                    }
                }
            }
        }
    }
    candidate
}
