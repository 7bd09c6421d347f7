//! SKU identifiers: `<family letter><size>` (e.g. `A1`, `C12`).
//!
//! The family is any single alphabetic character (`É1` is standard). The size
//! is any run of decimal digits, with no upper bound.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult, ValueObject};

/// Stock-keeping unit identifier, exactly as received.
///
/// Any non-blank string is a valid ledger key. Whether it also carries a
/// family and a size is a separate question answered by [`Sku::standard`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

impl Sku {
    /// Build a SKU from raw text (surrounding whitespace is trimmed).
    pub fn new(raw: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("sku cannot be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Family/size view of this SKU, or `None` for a non-standard SKU.
    pub fn standard(&self) -> Option<StandardSku> {
        StandardSku::parse(&self.0).ok()
    }
}

impl ValueObject for Sku {}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Sku {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Sku> for String {
    fn from(value: Sku) -> Self {
        value.0
    }
}

impl From<StandardSku> for Sku {
    fn from(value: StandardSku) -> Self {
        Self(value.to_string())
    }
}

/// Non-negative size of arbitrary width, kept as canonical decimal digits.
///
/// Ordered numerically: shorter digit strings are smaller, equal lengths
/// compare digit by digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkuSize(String);

impl SkuSize {
    /// Parse one or more ASCII digits; leading zeros are dropped.
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        Some(Self(if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() }))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `self + 1`, carrying through as many digits as needed.
    pub fn next(&self) -> Self {
        let mut digits = self.0.clone().into_bytes();
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                return Self(digits.into_iter().map(char::from).collect());
            }
        }
        // All nines: 99 -> 100.
        digits.insert(0, b'1');
        Self(digits.into_iter().map(char::from).collect())
    }
}

impl Ord for SkuSize {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.len().cmp(&other.0.len()).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for SkuSize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for SkuSize {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<String> for SkuSize {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| DomainError::validation(format!("invalid sku size {value:?}")))
    }
}

impl From<SkuSize> for String {
    fn from(value: SkuSize) -> Self {
        value.0
    }
}

impl core::fmt::Display for SkuSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A SKU that follows the `<family><size>` convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StandardSku {
    family: char,
    size: SkuSize,
}

impl StandardSku {
    pub fn new(family: char, size: impl Into<SkuSize>) -> DomainResult<Self> {
        let size = size.into();
        if !family.is_alphabetic() {
            return Err(DomainError::malformed_sku(
                format!("{family}{size}"),
                "family must be a single letter",
            ));
        }
        Ok(Self { family, size })
    }

    /// Parse `<letter><digits>`; anything else is a `MalformedSku`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let mut chars = raw.chars();
        let family = match chars.next() {
            Some(c) if c.is_alphabetic() => c,
            Some(_) => return Err(DomainError::malformed_sku(raw, "family must be a single letter")),
            None => return Err(DomainError::malformed_sku(raw, "empty sku")),
        };

        let suffix = chars.as_str();
        if suffix.is_empty() {
            return Err(DomainError::malformed_sku(raw, "missing numeric size"));
        }
        let size = SkuSize::parse(suffix)
            .ok_or_else(|| DomainError::malformed_sku(raw, "size must be a non-negative integer"))?;

        Ok(Self { family, size })
    }

    pub fn family(&self) -> char {
        self.family
    }

    pub fn size(&self) -> &SkuSize {
        &self.size
    }

    /// Same family, next integer size.
    pub fn next_size(&self) -> Self {
        Self {
            family: self.family,
            size: self.size.next(),
        }
    }
}

impl ValueObject for StandardSku {}

impl core::fmt::Display for StandardSku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.family, self.size)
    }
}

impl core::str::FromStr for StandardSku {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StandardSku {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StandardSku> for String {
    fn from(value: StandardSku) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(s: &str) -> SkuSize {
        SkuSize::parse(s).unwrap()
    }

    #[test]
    fn sku_trims_and_rejects_blank() {
        assert_eq!(Sku::new("  C5 ").unwrap().as_str(), "C5");
        assert!(matches!(Sku::new("   "), Err(DomainError::Validation(_))));
    }

    #[test]
    fn sku_deserialization_goes_through_validation() {
        assert!(serde_json::from_str::<Sku>(r#""""#).is_err());
        assert!(serde_json::from_str::<Sku>(r#""   ""#).is_err());
        assert_eq!(serde_json::from_str::<Sku>(r#"" A1 ""#).unwrap().as_str(), "A1");
        assert_eq!(serde_json::to_string(&Sku::new("B3").unwrap()).unwrap(), r#""B3""#);
    }

    #[test]
    fn standard_sku_round_trips_as_text() {
        let sku: StandardSku = serde_json::from_str(r#""C12""#).unwrap();
        assert_eq!(sku, StandardSku::parse("C12").unwrap());
        assert!(serde_json::from_str::<StandardSku>(r#""1C""#).is_err());
    }

    #[test]
    fn parses_family_and_size() {
        let sku = StandardSku::parse("C12").unwrap();
        assert_eq!(sku.family(), 'C');
        assert_eq!(sku.size(), &SkuSize::from(12u64));
        assert_eq!(sku.to_string(), "C12");
    }

    #[test]
    fn non_ascii_letter_is_a_family() {
        let sku = StandardSku::parse("É1").unwrap();
        assert_eq!(sku.family(), 'É');
        assert_eq!(sku.next_size().to_string(), "É2");
    }

    #[test]
    fn non_numeric_suffix_is_malformed() {
        for raw in ["X", "AB3", "A-1", "A+1", "A 1", "1A", "A١", ""] {
            let err = StandardSku::parse(raw).unwrap_err();
            assert!(
                matches!(err, DomainError::MalformedSku { .. }),
                "{raw:?} should be malformed, got {err:?}"
            );
        }
    }

    #[test]
    fn sizes_beyond_machine_integers_are_standard() {
        let sku = StandardSku::parse("B99999999999999999999999").unwrap();
        assert_eq!(sku.size().as_str(), "99999999999999999999999");
        assert!(sku.size() > &SkuSize::from(u64::MAX));
        assert_eq!(sku.next_size().to_string(), "B100000000000000000000000");
    }

    #[test]
    fn size_orders_numerically() {
        assert!(size("10") > size("9"));
        assert!(size("0009") < size("10"));
        assert_eq!(size("000"), size("0"));
        assert!(size("123") < size("124"));
    }

    #[test]
    fn size_increment_carries() {
        assert_eq!(size("0").next().as_str(), "1");
        assert_eq!(size("4").next().as_str(), "5");
        assert_eq!(size("199").next().as_str(), "200");
        assert_eq!(size("999").next().as_str(), "1000");
        assert_eq!(SkuSize::from(u64::MAX).next().as_str(), "18446744073709551616");
    }

    #[test]
    fn non_standard_sku_has_no_standard_view() {
        assert!(Sku::new("PALLET").unwrap().standard().is_none());
        assert_eq!(Sku::new("B3").unwrap().standard().map(|s| s.size().clone()), Some(SkuSize::from(3u64)));
    }

    #[test]
    fn next_size_stays_in_family() {
        let next = StandardSku::parse("C4").unwrap().next_size();
        assert_eq!(Sku::from(next).as_str(), "C5");
    }

    #[test]
    fn leading_zeros_are_normalised_by_next_size() {
        let next = StandardSku::parse("C05").unwrap().next_size();
        assert_eq!(next.to_string(), "C6");
    }
}
