use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tax_bracket::{Bracket, BracketSchedule};

/// Identifies one of the four schedules a tax report is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    Federal,
    State,
    Medicare,
    SocialSecurity,
}

impl ScheduleKind {
    pub fn all() -> &'static [ScheduleKind] {
        &[
            ScheduleKind::Federal,
            ScheduleKind::State,
            ScheduleKind::Medicare,
            ScheduleKind::SocialSecurity,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Federal => "federal",
            Self::State => "state",
            Self::Medicare => "medicare",
            Self::SocialSecurity => "social_security",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "federal" => Some(Self::Federal),
            "state" => Some(Self::State),
            "medicare" => Some(Self::Medicare),
            "social_security" | "social-security" => Some(Self::SocialSecurity),
            _ => None,
        }
    }
}

/// The named schedules a [`TaxReport`](super::TaxReport) is computed against.
///
/// Each schedule can be swapped independently; [`ScheduleSet::reference`]
/// provides the built-in tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSet {
    pub federal: BracketSchedule,
    pub state: BracketSchedule,
    pub medicare: BracketSchedule,
    pub social_security: BracketSchedule,
}

impl ScheduleSet {
    /// Built-in federal, Wisconsin, medicare and social security tables.
    ///
    /// Social security is a single 6.2% bracket capped at the wage base; the
    /// cap is expressed as a trailing 0% unbounded bracket.
    pub fn reference() -> Self {
        Self {
            federal: BracketSchedule::from_trusted(
                ScheduleKind::Federal.as_str(),
                vec![
                    Bracket::bounded(Decimal::new(10, 2), Decimal::new(9875, 0)),
                    Bracket::bounded(Decimal::new(12, 2), Decimal::new(40125, 0)),
                    Bracket::bounded(Decimal::new(22, 2), Decimal::new(85525, 0)),
                    Bracket::bounded(Decimal::new(24, 2), Decimal::new(163300, 0)),
                    Bracket::bounded(Decimal::new(32, 2), Decimal::new(207350, 0)),
                    Bracket::bounded(Decimal::new(35, 2), Decimal::new(518400, 0)),
                    Bracket::unbounded(Decimal::new(37, 2)),
                ],
            ),
            state: BracketSchedule::from_trusted(
                ScheduleKind::State.as_str(),
                vec![
                    Bracket::bounded(Decimal::new(354, 4), Decimal::new(11970, 0)),
                    Bracket::bounded(Decimal::new(465, 4), Decimal::new(23930, 0)),
                    Bracket::bounded(Decimal::new(627, 4), Decimal::new(263480, 0)),
                    Bracket::unbounded(Decimal::new(765, 4)),
                ],
            ),
            medicare: BracketSchedule::from_trusted(
                ScheduleKind::Medicare.as_str(),
                vec![
                    Bracket::bounded(Decimal::new(145, 4), Decimal::new(200000, 0)),
                    Bracket::unbounded(Decimal::new(235, 4)),
                ],
            ),
            social_security: BracketSchedule::from_trusted(
                ScheduleKind::SocialSecurity.as_str(),
                vec![
                    Bracket::bounded(Decimal::new(62, 3), Decimal::new(137000, 0)),
                    Bracket::unbounded(Decimal::ZERO),
                ],
            ),
        }
    }

    pub fn get(
        &self,
        kind: ScheduleKind,
    ) -> &BracketSchedule {
        match kind {
            ScheduleKind::Federal => &self.federal,
            ScheduleKind::State => &self.state,
            ScheduleKind::Medicare => &self.medicare,
            ScheduleKind::SocialSecurity => &self.social_security,
        }
    }

    /// Replaces one schedule, returning the previous one.
    pub fn replace(
        &mut self,
        kind: ScheduleKind,
        schedule: BracketSchedule,
    ) -> BracketSchedule {
        let slot = match kind {
            ScheduleKind::Federal => &mut self.federal,
            ScheduleKind::State => &mut self.state,
            ScheduleKind::Medicare => &mut self.medicare,
            ScheduleKind::SocialSecurity => &mut self.social_security,
        };
        std::mem::replace(slot, schedule)
    }
}

impl Default for ScheduleSet {
    fn default() -> Self {
        Self::reference()
    }
}
