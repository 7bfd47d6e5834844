use serde::Serialize;

use super::domain::Province;

/// Upper bound of the top income bracket in every province table.
pub const INCOME_CEILING: f64 = 10_000_000.0;

/// Whole-dollar income range mapped to a fixed annual indirect-cost estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncomeBracket {
    pub min: f64,
    pub max: f64,
    pub indirect_cost: f64,
}

impl IncomeBracket {
    const fn new(min: f64, max: f64, indirect_cost: f64) -> Self {
        Self {
            min,
            max,
            indirect_cost,
        }
    }

    /// Inclusive on both ends; callers pass whole-dollar incomes.
    pub fn contains(&self, income: f64) -> bool {
        income >= self.min && income <= self.max
    }
}

/// Rebate constants and indirect-cost deciles for one province (2023/24, $65/tonne).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProvinceProfile {
    pub province: Province,
    pub base_amount: f64,
    pub per_child_amount: f64,
    pub second_adult_amount: f64,
    pub brackets: &'static [IncomeBracket; 10],
}

impl ProvinceProfile {
    /// First bracket whose range holds the income once truncated to whole dollars.
    /// Negative and NaN incomes match nothing.
    pub fn bracket_for(&self, income: f64) -> Option<&'static IncomeBracket> {
        if income.is_nan() || income < 0.0 {
            return None;
        }
        let whole_dollars = income.trunc();
        self.brackets
            .iter()
            .find(|bracket| bracket.contains(whole_dollars))
    }
}

impl Province {
    pub fn profile(&self) -> &'static ProvinceProfile {
        match self {
            Province::Alberta => &ALBERTA,
            Province::Saskatchewan => &SASKATCHEWAN,
            Province::Manitoba => &MANITOBA,
            Province::Ontario => &ONTARIO,
        }
    }
}

static ALBERTA: ProvinceProfile = ProvinceProfile {
    province: Province::Alberta,
    base_amount: 772.0,
    per_child_amount: 193.0,
    second_adult_amount: 386.0,
    brackets: &ALBERTA_BRACKETS,
};

static SASKATCHEWAN: ProvinceProfile = ProvinceProfile {
    province: Province::Saskatchewan,
    base_amount: 680.0,
    per_child_amount: 170.0,
    second_adult_amount: 340.0,
    brackets: &SASKATCHEWAN_BRACKETS,
};

static MANITOBA: ProvinceProfile = ProvinceProfile {
    province: Province::Manitoba,
    base_amount: 528.0,
    per_child_amount: 132.0,
    second_adult_amount: 264.0,
    brackets: &MANITOBA_BRACKETS,
};

static ONTARIO: ProvinceProfile = ProvinceProfile {
    province: Province::Ontario,
    base_amount: 488.0,
    per_child_amount: 122.0,
    second_adult_amount: 244.0,
    brackets: &ONTARIO_BRACKETS,
};

static ALBERTA_BRACKETS: [IncomeBracket; 10] = [
    IncomeBracket::new(0.0, 38_990.0, 260.27),
    IncomeBracket::new(38_991.0, 61_384.0, 261.73),
    IncomeBracket::new(61_385.0, 87_284.0, 351.88),
    IncomeBracket::new(87_285.0, 116_466.0, 402.77),
    IncomeBracket::new(116_467.0, 146_253.0, 474.02),
    IncomeBracket::new(146_254.0, 173_858.0, 542.36),
    IncomeBracket::new(173_859.0, 207_436.0, 716.85),
    IncomeBracket::new(207_437.0, 250_155.0, 754.65),
    IncomeBracket::new(250_156.0, 341_879.0, 735.75),
    IncomeBracket::new(341_880.0, INCOME_CEILING, 913.14),
];

static SASKATCHEWAN_BRACKETS: [IncomeBracket; 10] = [
    IncomeBracket::new(0.0, 32_012.0, 404.23),
    IncomeBracket::new(32_013.0, 48_263.0, 463.84),
    IncomeBracket::new(48_264.0, 72_403.0, 494.38),
    IncomeBracket::new(72_404.0, 95_819.0, 533.64),
    IncomeBracket::new(95_820.0, 119_501.0, 548.18),
    IncomeBracket::new(119_502.0, 147_542.0, 663.05),
    IncomeBracket::new(147_543.0, 180_019.0, 770.65),
    IncomeBracket::new(180_020.0, 224_447.0, 994.57),
    IncomeBracket::new(224_448.0, 285_421.0, 1_224.31),
    IncomeBracket::new(285_422.0, INCOME_CEILING, 1_494.76),
];

static MANITOBA_BRACKETS: [IncomeBracket; 10] = [
    IncomeBracket::new(0.0, 31_454.0, 226.83),
    IncomeBracket::new(31_455.0, 48_465.0, 222.47),
    IncomeBracket::new(48_466.0, 68_111.0, 279.18),
    IncomeBracket::new(68_112.0, 87_371.0, 295.17),
    IncomeBracket::new(87_372.0, 109_805.0, 287.90),
    IncomeBracket::new(109_806.0, 131_961.0, 343.16),
    IncomeBracket::new(131_962.0, 159_828.0, 398.41),
    IncomeBracket::new(159_829.0, 199_343.0, 485.65),
    IncomeBracket::new(199_344.0, 259_839.0, 658.68),
    IncomeBracket::new(259_840.0, INCOME_CEILING, 766.28),
];

static ONTARIO_BRACKETS: [IncomeBracket; 10] = [
    IncomeBracket::new(0.0, 29_658.0, 157.04),
    IncomeBracket::new(29_659.0, 47_326.0, 159.95),
    IncomeBracket::new(47_327.0, 67_119.0, 206.48),
    IncomeBracket::new(67_120.0, 90_906.0, 216.65),
    IncomeBracket::new(90_907.0, 115_283.0, 247.19),
    IncomeBracket::new(115_284.0, 143_109.0, 274.82),
    IncomeBracket::new(143_110.0, 174_348.0, 309.71),
    IncomeBracket::new(174_349.0, 218_430.0, 366.42),
    IncomeBracket::new(218_431.0, 297_903.0, 442.03),
    IncomeBracket::new(297_904.0, INCOME_CEILING, 568.53),
];

/// Rebate constants for one province, as listed to callers populating a selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvinceSummary {
    pub code: &'static str,
    pub name: &'static str,
    pub base_amount: f64,
    pub per_child_amount: f64,
    pub second_adult_amount: f64,
}

pub fn province_catalogue() -> Vec<ProvinceSummary> {
    Province::ALL
        .iter()
        .map(|province| {
            let profile = province.profile();
            ProvinceSummary {
                code: province.code(),
                name: province.label(),
                base_amount: profile.base_amount,
                per_child_amount: profile.per_child_amount,
                second_adult_amount: profile.second_adult_amount,
            }
        })
        .collect()
}
