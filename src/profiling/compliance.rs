// Compliance-sensitivity flags derived from column names

use super::{ColumnProfile, ComplianceFlags, ComplianceKeywords};

/// Derives [`ComplianceFlags`] from the ordered column profile list.
///
/// Purely name-based: a flag is raised when any lower-cased column name
/// contains any keyword of its configured set. Values are never
/// inspected.
pub struct ComplianceFlagger<'a> {
    keywords: &'a ComplianceKeywords,
}

impl<'a> ComplianceFlagger<'a> {
    /// Create a flagger over a keyword configuration.
    pub fn new(keywords: &'a ComplianceKeywords) -> Self {
        ComplianceFlagger { keywords }
    }

    /// Compute the flags for a set of column profiles.
    pub fn flag(&self, columns: &[ColumnProfile]) -> ComplianceFlags {
        let names: Vec<String> = columns
            .iter()
            .map(|column| column.column_name.to_lowercase())
            .collect();

        ComplianceFlags {
            kyc_fields_present: Self::any_contains(&names, &self.keywords.kyc),
            monetary_fields_present: Self::any_contains(&names, &self.keywords.monetary),
            personal_data_present: Self::any_contains(&names, &self.keywords.personal),
        }
    }

    fn any_contains(names: &[String], keywords: &[String]) -> bool {
        names
            .iter()
            .any(|name| keywords.iter().any(|keyword| name.contains(keyword)))
    }
}
