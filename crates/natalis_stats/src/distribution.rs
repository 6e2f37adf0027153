//! Weighted category distributions normalized to whole percentages.

/// A finished distribution: labelled categories with integer percentages.
///
/// Percentages always sum to exactly 100 unless the underlying weight
/// total was zero, in which case every category is 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    entries: Vec<(&'static str, u8)>,
}

impl Distribution {
    /// Builds a distribution from raw weight buckets.
    ///
    /// Each category except the last is rounded to the nearest whole
    /// percent; the last category absorbs the rounding residue so the
    /// total lands on 100. When the leading categories already round
    /// past 100, the excess comes out of the largest of them instead,
    /// so the invariant holds even with an empty final category.
    pub(crate) fn from_buckets(labels: &[&'static str], buckets: &[u32]) -> Self {
        debug_assert_eq!(labels.len(), buckets.len());
        let total: u32 = buckets.iter().sum();
        if total == 0 {
            let entries = labels.iter().map(|l| (*l, 0u8)).collect();
            return Self { entries };
        }
        let mut assigned: u32 = 0;
        let mut leading = Vec::with_capacity(labels.len().saturating_sub(1));
        for bucket in &buckets[..buckets.len() - 1] {
            let p = ((*bucket as f64 / total as f64) * 100.0).round() as u32;
            assigned += p;
            leading.push(p);
        }
        if assigned > 100 {
            let overshoot = assigned - 100;
            if let Some(largest) = leading.iter_mut().max() {
                let taken = overshoot.min(*largest);
                *largest -= taken;
                assigned -= taken;
            }
        }
        let mut entries = Vec::with_capacity(labels.len());
        for (label, pct) in labels.iter().zip(&leading) {
            entries.push((*label, *pct as u8));
        }
        entries.push((labels[labels.len() - 1], (100 - assigned) as u8));
        Self { entries }
    }

    /// Category labels and percentages, in enumeration order.
    pub fn entries(&self) -> &[(&'static str, u8)] {
        &self.entries
    }

    /// Percentage for a named category, if present.
    pub fn percent(&self, label: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, p)| *p)
    }

    /// The first category holding the maximum percentage.
    pub fn primary(&self) -> &'static str {
        let mut best = self.entries[0];
        for &(label, pct) in &self.entries[1..] {
            if pct > best.1 {
                best = (label, pct);
            }
        }
        best.0
    }

    /// Sum of all percentages. 100 for any non-empty weight total.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, p)| *p as u32).sum()
    }
}

/// The statistical breakdowns derivable from a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionKind {
    Hemisphere,
    EastWest,
    Qualities,
    Temperaments,
    Elements,
    Modalities,
    Polarities,
}

impl DistributionKind {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hemisphere => "Hemisphere",
            Self::EastWest => "East-West",
            Self::Qualities => "Qualities",
            Self::Temperaments => "Temperaments",
            Self::Elements => "Elements",
            Self::Modalities => "Modalities",
            Self::Polarities => "Polarities",
        }
    }

    pub const fn all() -> &'static [DistributionKind] {
        &ALL_KINDS
    }
}

pub const ALL_KINDS: [DistributionKind; 7] = [
    DistributionKind::Hemisphere,
    DistributionKind::EastWest,
    DistributionKind::Qualities,
    DistributionKind::Temperaments,
    DistributionKind::Elements,
    DistributionKind::Modalities,
    DistributionKind::Polarities,
];
