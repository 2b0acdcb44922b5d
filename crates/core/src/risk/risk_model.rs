use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why the user is investing.
///
/// The questionnaire sends either the Spanish answer label or the stored
/// code; `from_input` accepts both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentPurpose {
    Retirement,
    HousePurchase,
    Education,
    LongTermGrowth,
    PassiveIncome,
    Other,
}

impl InvestmentPurpose {
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "Jubilación" | "retirement" => Some(InvestmentPurpose::Retirement),
            "Comprar una casa" | "house_purchase" => Some(InvestmentPurpose::HousePurchase),
            "Educación de hijos" | "education" => Some(InvestmentPurpose::Education),
            "Crecimiento a largo plazo" | "long_term_growth" => {
                Some(InvestmentPurpose::LongTermGrowth)
            }
            "Generar ingresos pasivos" | "passive_income" => Some(InvestmentPurpose::PassiveIncome),
            "Otro" | "other" => Some(InvestmentPurpose::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentPurpose::Retirement => "retirement",
            InvestmentPurpose::HousePurchase => "house_purchase",
            InvestmentPurpose::Education => "education",
            InvestmentPurpose::LongTermGrowth => "long_term_growth",
            InvestmentPurpose::PassiveIncome => "passive_income",
            InvestmentPurpose::Other => "other",
        }
    }
}

/// How long the user intends to hold positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeHorizon {
    ShortTermTrader,
    LongTermHolder,
}

impl TimeHorizon {
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "Trader (Corto Plazo)" | "short_term_trader" => Some(TimeHorizon::ShortTermTrader),
            "Holder (Largo Plazo)" | "long_term_holder" => Some(TimeHorizon::LongTermHolder),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeHorizon::ShortTermTrader => "short_term_trader",
            TimeHorizon::LongTermHolder => "long_term_holder",
        }
    }
}

/// The user's answer to the drawdown-reaction question.
///
/// The questionnaire sends the option letter (A through D, from panic
/// selling to buying the dip) or the stored code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskReaction {
    HighAversion,
    ModerateAversion,
    ModerateTolerance,
    HighTolerance,
}

impl RiskReaction {
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "A" | "high_aversion" => Some(RiskReaction::HighAversion),
            "B" | "moderate_aversion" => Some(RiskReaction::ModerateAversion),
            "C" | "moderate_tolerance" => Some(RiskReaction::ModerateTolerance),
            "D" | "high_tolerance" => Some(RiskReaction::HighTolerance),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskReaction::HighAversion => "high_aversion",
            RiskReaction::ModerateAversion => "moderate_aversion",
            RiskReaction::ModerateTolerance => "moderate_tolerance",
            RiskReaction::HighTolerance => "high_tolerance",
        }
    }
}

/// One questionnaire result per portfolio; saving again overwrites the
/// answers in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub id: i64,
    pub portfolio_id: i64,
    pub purpose: InvestmentPurpose,
    pub time_horizon: TimeHorizon,
    pub risk_reaction: RiskReaction,
    pub updated_at: DateTime<Utc>,
}

/// Raw questionnaire submission, before the answers are mapped to their
/// stored codes.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRiskAssessment {
    pub user_id: String,
    pub portfolio_id: i64,
    pub purpose: String,
    pub time_horizon: String,
    pub risk_reaction: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purpose_accepts_labels_and_codes() {
        assert_eq!(
            InvestmentPurpose::from_input("Jubilación"),
            Some(InvestmentPurpose::Retirement)
        );
        assert_eq!(
            InvestmentPurpose::from_input("retirement"),
            Some(InvestmentPurpose::Retirement)
        );
        assert_eq!(
            InvestmentPurpose::from_input("Comprar una casa"),
            Some(InvestmentPurpose::HousePurchase)
        );
        assert_eq!(
            InvestmentPurpose::from_input("Educación de hijos"),
            Some(InvestmentPurpose::Education)
        );
        assert_eq!(
            InvestmentPurpose::from_input("Crecimiento a largo plazo"),
            Some(InvestmentPurpose::LongTermGrowth)
        );
        assert_eq!(
            InvestmentPurpose::from_input("Generar ingresos pasivos"),
            Some(InvestmentPurpose::PassiveIncome)
        );
        assert_eq!(
            InvestmentPurpose::from_input("Otro"),
            Some(InvestmentPurpose::Other)
        );
        assert_eq!(InvestmentPurpose::from_input("Ahorro"), None);
    }

    #[test]
    fn test_time_horizon_accepts_labels_and_codes() {
        assert_eq!(
            TimeHorizon::from_input("Trader (Corto Plazo)"),
            Some(TimeHorizon::ShortTermTrader)
        );
        assert_eq!(
            TimeHorizon::from_input("long_term_holder"),
            Some(TimeHorizon::LongTermHolder)
        );
        assert_eq!(TimeHorizon::from_input("Mediano plazo"), None);
    }

    #[test]
    fn test_reaction_accepts_letters_and_codes() {
        assert_eq!(
            RiskReaction::from_input("A"),
            Some(RiskReaction::HighAversion)
        );
        assert_eq!(
            RiskReaction::from_input("B"),
            Some(RiskReaction::ModerateAversion)
        );
        assert_eq!(
            RiskReaction::from_input("C"),
            Some(RiskReaction::ModerateTolerance)
        );
        assert_eq!(
            RiskReaction::from_input("D"),
            Some(RiskReaction::HighTolerance)
        );
        assert_eq!(RiskReaction::from_input("high_tolerance"), Some(RiskReaction::HighTolerance));
        assert_eq!(RiskReaction::from_input("E"), None);
        assert_eq!(RiskReaction::from_input("a"), None);
    }

    #[test]
    fn test_assessment_serializes_codes() {
        let assessment = RiskAssessment {
            id: 1,
            portfolio_id: 3,
            purpose: InvestmentPurpose::Retirement,
            time_horizon: TimeHorizon::LongTermHolder,
            risk_reaction: RiskReaction::ModerateTolerance,
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["purpose"], "retirement");
        assert_eq!(json["timeHorizon"], "long_term_holder");
        assert_eq!(json["riskReaction"], "moderate_tolerance");
    }
}
