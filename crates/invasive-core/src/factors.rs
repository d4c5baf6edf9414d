use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantitative dispersal measurements for one species.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DispersalFactors {
    /// Seeds per fruit.
    pub sf: f64,
    /// Annual seed rain, seeds per m² per year.
    pub asr: f64,
    /// Seed viability in months.
    pub via: f64,
    /// Long-distance dispersal strength on a 0-10 scale.
    pub ldd: f64,
}

impl DispersalFactors {
    pub fn new(sf: f64, asr: f64, via: f64, ldd: f64) -> Self {
        Self { sf, asr, via, ldd }
    }

    pub fn value(&self, factor: DispersalSubFactor) -> f64 {
        match factor {
            DispersalSubFactor::SeedsPerFruit => self.sf,
            DispersalSubFactor::AnnualSeedRain => self.asr,
            DispersalSubFactor::Viability => self.via,
            DispersalSubFactor::LongDistanceDispersal => self.ldd,
        }
    }

    pub fn with_value(mut self, factor: DispersalSubFactor, value: f64) -> Self {
        match factor {
            DispersalSubFactor::SeedsPerFruit => self.sf = value,
            DispersalSubFactor::AnnualSeedRain => self.asr = value,
            DispersalSubFactor::Viability => self.via = value,
            DispersalSubFactor::LongDistanceDispersal => self.ldd = value,
        }
        self
    }
}

/// Linguistic ratings as submitted; labels are parsed during fuzzification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinguisticFactors {
    pub vrs: String,
    pub sgr: String,
    pub ha: String,
    pub nmd: String,
}

impl LinguisticFactors {
    pub fn new(
        vrs: impl Into<String>,
        sgr: impl Into<String>,
        ha: impl Into<String>,
        nmd: impl Into<String>,
    ) -> Self {
        Self {
            vrs: vrs.into(),
            sgr: sgr.into(),
            ha: ha.into(),
            nmd: nmd.into(),
        }
    }

    pub fn uniform(label: &str) -> Self {
        Self::new(label, label, label, label)
    }

    pub fn label(&self, factor: LinguisticSubFactor) -> &str {
        match factor {
            LinguisticSubFactor::VegetativeReproduction => &self.vrs,
            LinguisticSubFactor::SeedGermination => &self.sgr,
            LinguisticSubFactor::HumanActivity => &self.ha,
            LinguisticSubFactor::Disturbance => &self.nmd,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DispersalSubFactor {
    SeedsPerFruit,
    AnnualSeedRain,
    Viability,
    LongDistanceDispersal,
}

impl DispersalSubFactor {
    pub const ALL: [DispersalSubFactor; 4] = [
        DispersalSubFactor::SeedsPerFruit,
        DispersalSubFactor::AnnualSeedRain,
        DispersalSubFactor::Viability,
        DispersalSubFactor::LongDistanceDispersal,
    ];

    pub fn code(self) -> &'static str {
        match self {
            DispersalSubFactor::SeedsPerFruit => "SF",
            DispersalSubFactor::AnnualSeedRain => "ASR",
            DispersalSubFactor::Viability => "VIA",
            DispersalSubFactor::LongDistanceDispersal => "LDD",
        }
    }
}

impl fmt::Display for DispersalSubFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinguisticSubFactor {
    VegetativeReproduction,
    SeedGermination,
    HumanActivity,
    Disturbance,
}

impl LinguisticSubFactor {
    pub const ALL: [LinguisticSubFactor; 4] = [
        LinguisticSubFactor::VegetativeReproduction,
        LinguisticSubFactor::SeedGermination,
        LinguisticSubFactor::HumanActivity,
        LinguisticSubFactor::Disturbance,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LinguisticSubFactor::VegetativeReproduction => "VRS",
            LinguisticSubFactor::SeedGermination => "SGR",
            LinguisticSubFactor::HumanActivity => "HA",
            LinguisticSubFactor::Disturbance => "NMD",
        }
    }
}

impl fmt::Display for LinguisticSubFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The four main risk factors. MIS (man-made influence on spreading) is built from HA and NMD.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MainFactor {
    Dispersal,
    Vrs,
    Sgr,
    Mis,
}

impl MainFactor {
    pub const ALL: [MainFactor; 4] = [
        MainFactor::Dispersal,
        MainFactor::Vrs,
        MainFactor::Sgr,
        MainFactor::Mis,
    ];

    pub fn code(self) -> &'static str {
        match self {
            MainFactor::Dispersal => "DIS",
            MainFactor::Vrs => "VRS",
            MainFactor::Sgr => "SGR",
            MainFactor::Mis => "MIS",
        }
    }
}

impl fmt::Display for MainFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Dispersal categories (Peiris et al. 2017); each can reshape the SF/VIA memberships.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DispersalCategory {
    I,
    II,
    III,
    IV,
}

impl DispersalCategory {
    pub fn classify(factors: &DispersalFactors) -> Self {
        if factors.asr <= 20_000.0 && factors.via <= 120.0 && factors.sf <= 200.0 {
            DispersalCategory::II
        } else if factors.sf <= 200.0 {
            DispersalCategory::I
        } else if factors.asr >= 100_000.0 && factors.sf >= 100.0 {
            DispersalCategory::III
        } else {
            DispersalCategory::IV
        }
    }
}
