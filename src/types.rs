//! Cap-table domain types consumed by the sidebar
//!
//! Holders and rounds are owned by the host application. The sidebar only ever
//! borrows them for one derivation pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Kind of pro-rata right an instrument exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProRataType {
    /// Right to keep the current ownership percentage
    #[default]
    Standard,
    /// Right to buy more than the current ownership percentage
    Super,
}

/// Whether an instrument is a direct allocation or an exercised pro-rata right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum InstrumentKind {
    Direct,
    ProRata,
}

/// An equity holder shown in the sidebar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holder {
    /// Unique within a holder collection; doubles as the drag identifier key
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Holder {
    /// Create an ungrouped holder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: None,
            description: None,
        }
    }

    /// Builder-style group assignment
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The group this holder belongs to, if any.
    ///
    /// An empty group string counts as ungrouped.
    pub fn group_name(&self) -> Option<&str> {
        self.group.as_deref().filter(|g| !g.is_empty())
    }
}

/// A single allocation of equity inside a round
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Instrument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    /// Presence of this marker makes the instrument a pro-rata allocation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pro_rata_type: Option<ProRataType>,
    /// Display-only figure; never used by the derivations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl Instrument {
    /// A direct allocation to `holder`
    pub fn direct(holder: impl Into<String>) -> Self {
        Self {
            holder_name: Some(holder.into()),
            ..Self::default()
        }
    }

    /// An exercised pro-rata allocation for `holder`
    pub fn pro_rata(holder: impl Into<String>, kind: ProRataType) -> Self {
        Self {
            holder_name: Some(holder.into()),
            pro_rata_type: Some(kind),
            amount: None,
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    #[inline]
    pub fn kind(&self) -> InstrumentKind {
        if self.pro_rata_type.is_some() {
            InstrumentKind::ProRata
        } else {
            InstrumentKind::Direct
        }
    }

    #[inline]
    pub fn holder(&self) -> Option<&str> {
        self.holder_name.as_deref()
    }
}

/// A financing round
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Round {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_date: Option<NaiveDate>,
    #[serde(default)]
    pub instruments: Vec<Instrument>,
}

impl Round {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.round_date = Some(date);
        self
    }

    pub fn with_instrument(mut self, instrument: Instrument) -> Self {
        self.instruments.push(instrument);
        self
    }

    /// Label shown in the sidebar: the round name, or `Round N` (1-based) by position
    pub fn display_label(&self, index: usize) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Round {}", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_group_counts_as_ungrouped() {
        let holder = Holder::new("Alice").with_group("");
        assert_eq!(holder.group_name(), None);

        let holder = Holder::new("Bob").with_group("Founders");
        assert_eq!(holder.group_name(), Some("Founders"));
    }

    #[test]
    fn test_instrument_kind_follows_pro_rata_marker() {
        assert_eq!(Instrument::direct("Alice").kind(), InstrumentKind::Direct);
        assert_eq!(
            Instrument::pro_rata("Alice", ProRataType::Super).kind(),
            InstrumentKind::ProRata
        );
    }

    #[test]
    fn test_round_display_label_fallback() {
        assert_eq!(Round::new("Seed").display_label(0), "Seed");
        assert_eq!(Round::default().display_label(0), "Round 1");
        assert_eq!(Round::new("").display_label(2), "Round 3");
    }

    #[test]
    fn test_pro_rata_type_string_forms() {
        assert_eq!(ProRataType::Standard.to_string(), "standard");
        assert_eq!("super".parse::<ProRataType>().ok(), Some(ProRataType::Super));
        assert_eq!(InstrumentKind::ProRata.to_string(), "pro-rata");
    }

    #[test]
    fn test_instrument_json_shape() {
        let json = r#"{"holder_name":"Alice","pro_rata_type":"standard"}"#;
        let instrument: Instrument = serde_json::from_str(json).unwrap();
        assert_eq!(instrument.holder(), Some("Alice"));
        assert_eq!(instrument.kind(), InstrumentKind::ProRata);

        let direct = serde_json::to_string(&Instrument::direct("Bob")).unwrap();
        assert_eq!(direct, r#"{"holder_name":"Bob"}"#);
    }

    #[test]
    fn test_round_date_is_iso() {
        let json = r#"{"name":"Series A","round_date":"2024-03-01","instruments":[]}"#;
        let round: Round = serde_json::from_str(json).unwrap();
        assert_eq!(round.round_date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }
}
