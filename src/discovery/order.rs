//! Processing order for classified parts.
//!
//! Primary textual content must be substituted before chart and embedded
//! data so cross-references resolve against already-populated host content.
//! The priority is a rank table, not code: the relative order of the
//! header/footer, notes, and drawing categories has no observed evidence, so
//! they share a tier by default and callers can supply their own tiers.

use super::record::{PartCategory, XmlFileRecord};

/// Default priority tiers, highest priority first. HeaderFooter, Notes, and
/// Drawing share a tier just above Other.
const DEFAULT_TIERS: &[&[PartCategory]] = &[
    &[PartCategory::Content],
    &[PartCategory::Chart],
    &[PartCategory::Comments],
    &[PartCategory::Relationships],
    &[
        PartCategory::HeaderFooter,
        PartCategory::Notes,
        PartCategory::Drawing,
    ],
    &[PartCategory::Other],
];

/// Category-to-rank table driving [`sort_xml_files_with`].
///
/// Lower rank sorts first. Categories absent from the supplied tiers rank
/// after every named tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOrder {
    ranks: [u8; PartCategory::COUNT],
}

impl CategoryOrder {
    /// Build an order from explicit priority tiers, highest priority first.
    /// Categories sharing a tier compare equal, so the stable sort preserves
    /// their relative input order.
    pub fn from_tiers(tiers: &[&[PartCategory]]) -> Self {
        let mut ranks = [tiers.len() as u8; PartCategory::COUNT];
        for (rank, tier) in tiers.iter().enumerate() {
            for &category in *tier {
                ranks[category as usize] = rank as u8;
            }
        }
        Self { ranks }
    }

    /// Rank of a category; lower sorts first.
    #[inline]
    pub fn rank(&self, category: PartCategory) -> u8 {
        self.ranks[category as usize]
    }
}

impl Default for CategoryOrder {
    fn default() -> Self {
        Self::from_tiers(DEFAULT_TIERS)
    }
}

/// Stable-sort records into default processing order.
///
/// Sorts by `(category rank, embedded rank)`: within a category,
/// non-embedded parts come before embedded ones, and ties keep their
/// relative input order. Idempotent.
pub fn sort_xml_files(records: &mut [XmlFileRecord]) {
    sort_xml_files_with(records, &CategoryOrder::default());
}

/// Stable-sort records using a caller-supplied category order.
pub fn sort_xml_files_with(records: &mut [XmlFileRecord], order: &CategoryOrder) {
    records.sort_by_key(|record| (order.rank(record.category), record.is_embedded));
}
