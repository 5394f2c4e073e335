//! Normalized shared-expense record derived from an extraction.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

use super::extraction::Extraction;

/// How the expense is divided between participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    Equal,
    Custom,
}

/// Borrower name to amount owed, in the order the borrowers were listed.
///
/// A repeated name overwrites the earlier amount but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomSplits(Vec<(String, f64)>);

impl CustomSplits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, amount: f64) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = amount,
            None => self.0.push((name, amount)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, amount)| *amount)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, amount)| (name.as_str(), *amount))
    }
}

impl Serialize for CustomSplits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, amount) in &self.0 {
            map.serialize_entry(name, amount)?;
        }
        map.end()
    }
}

struct SplitsVisitor;

impl<'de> Visitor<'de> for SplitsVisitor {
    type Value = CustomSplits;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of participant name to amount")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut splits = CustomSplits::new();
        while let Some((name, amount)) = access.next_entry::<String, f64>()? {
            splits.insert(name, amount);
        }
        Ok(splits)
    }
}

impl<'de> Deserialize<'de> for CustomSplits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SplitsVisitor)
    }
}

/// Structured expense produced for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExpenseDetails {
    /// Total paid by all lenders
    #[schema(example = 100.0)]
    pub amount: f64,
    #[schema(example = "Expense with 1 participants")]
    pub description: String,
    /// First lender, if any
    pub payer: Option<String>,
    /// Named borrowers in order
    pub participants: Vec<String>,
    pub split_type: SplitType,
    #[schema(value_type = Option<std::collections::HashMap<String, f64>>)]
    pub custom_splits: Option<CustomSplits>,
    pub label: Option<String>,
}

impl ExpenseDetails {
    /// Derives the expense record from an extraction.
    ///
    /// Any named borrower makes the split `custom`, whatever the amounts are.
    pub fn from_extraction(extraction: &Extraction) -> Self {
        let amount: f64 = extraction
            .lenders
            .iter()
            .map(|lender| lender.amount_lent.unwrap_or(0.0))
            .sum();

        let payer = extraction
            .lenders
            .first()
            .and_then(|lender| lender.name.clone());

        let mut participants = Vec::new();
        let mut splits = CustomSplits::new();
        for borrower in &extraction.borrowers {
            let Some(name) = borrower.name.as_deref().filter(|name| !name.is_empty()) else {
                continue;
            };
            participants.push(name.to_string());
            splits.insert(name, borrower.amount_borrowed.unwrap_or(0.0));
        }

        let (split_type, custom_splits) = if splits.is_empty() {
            (SplitType::Equal, None)
        } else {
            (SplitType::Custom, Some(splits))
        };

        Self {
            amount,
            description: format!("Expense with {} participants", participants.len()),
            payer,
            participants,
            split_type,
            custom_splits,
            label: extraction.label.clone(),
        }
    }
}
