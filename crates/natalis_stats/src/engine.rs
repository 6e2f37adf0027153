//! Weighted statistics over a finished chart.
//!
//! Every breakdown walks the chart's placements once, adds each body's
//! point weight into category buckets, and hands the buckets to the
//! shared percentage normalization. Bodies without a placement or with
//! a zero weight never contribute. House-keyed breakdowns use the
//! geometric house, so the 5-degree allowance never shifts a body
//! across a hemisphere line.

use natalis_base::{
    CelestialBody, Element, Modality, Moisture, Polarity, SignAttributeTable, Temperament,
    Temperature, WeightTable,
};
use natalis_chart::{Chart, PointPlacement};

use crate::distribution::{Distribution, DistributionKind};

/// Statistics engine borrowing a chart and its scoring tables.
#[derive(Debug, Clone, Copy)]
pub struct ChartStatistics<'a> {
    chart: &'a Chart,
    weights: &'a WeightTable,
    attributes: &'a SignAttributeTable,
}

impl<'a> ChartStatistics<'a> {
    pub fn new(
        chart: &'a Chart,
        weights: &'a WeightTable,
        attributes: &'a SignAttributeTable,
    ) -> Self {
        Self {
            chart,
            weights,
            attributes,
        }
    }

    /// Placements that carry a non-zero point weight.
    fn weighted(&self) -> impl Iterator<Item = (CelestialBody, &'a PointPlacement, u32)> + '_ {
        self.chart.bodies().filter_map(|(body, placement)| {
            let w = self.weights.points(body) as u32;
            if w == 0 { None } else { Some((body, placement, w)) }
        })
    }

    /// Dispatches to the named breakdown. `Qualities` yields the
    /// four-way primitive split.
    pub fn distribution(&self, kind: DistributionKind) -> Distribution {
        match kind {
            DistributionKind::Hemisphere => self.hemisphere(),
            DistributionKind::EastWest => self.east_west(),
            DistributionKind::Qualities => self.qualities().primitive,
            DistributionKind::Temperaments => self.temperaments(),
            DistributionKind::Elements => self.elements(),
            DistributionKind::Modalities => self.modalities(),
            DistributionKind::Polarities => self.polarities(),
        }
    }

    /// Superior (houses 7-12) versus Inferior (houses 1-6).
    pub fn hemisphere(&self) -> Distribution {
        let mut buckets = [0u32; 2];
        for (_, p, w) in self.weighted() {
            if p.house_geometric >= 7 {
                buckets[0] += w;
            } else {
                buckets[1] += w;
            }
        }
        Distribution::from_buckets(&["Superior", "Inferior"], &buckets)
    }

    /// Eastern (houses 10-12 and 1-3) versus Western (houses 4-9).
    pub fn east_west(&self) -> Distribution {
        let mut buckets = [0u32; 2];
        for (_, p, w) in self.weighted() {
            let h = p.house_geometric;
            if h >= 10 || h <= 3 {
                buckets[0] += w;
            } else {
                buckets[1] += w;
            }
        }
        Distribution::from_buckets(&["Eastern", "Western"], &buckets)
    }

    /// Hot/Cold and Wet/Dry axes plus their four-way product.
    pub fn qualities(&self) -> QualitiesBreakdown {
        let mut hot = 0u32;
        let mut cold = 0u32;
        let mut wet = 0u32;
        let mut dry = 0u32;
        for (_, p, w) in self.weighted() {
            let attrs = self.attributes.get(p.sign);
            match attrs.temperature {
                Temperature::Hot => hot += w,
                Temperature::Cold => cold += w,
            }
            match attrs.moisture {
                Moisture::Wet => wet += w,
                Moisture::Dry => dry += w,
            }
        }
        let temperature = Distribution::from_buckets(&["Hot", "Cold"], &[hot, cold]);
        let moisture = Distribution::from_buckets(&["Wet", "Dry"], &[wet, dry]);

        // Cross the two axes on the already-normalized axis percentages,
        // then normalize the products as a four-way split of their own.
        let hot_pct = temperature.entries()[0].1 as u32;
        let cold_pct = temperature.entries()[1].1 as u32;
        let wet_pct = moisture.entries()[0].1 as u32;
        let dry_pct = moisture.entries()[1].1 as u32;
        let primitive = Distribution::from_buckets(
            &["Hot & Dry", "Hot & Wet", "Cold & Dry", "Cold & Wet"],
            &[
                hot_pct * dry_pct / 100,
                hot_pct * wet_pct / 100,
                cold_pct * dry_pct / 100,
                cold_pct * wet_pct / 100,
            ],
        );
        QualitiesBreakdown {
            temperature,
            moisture,
            primitive,
        }
    }

    pub fn temperaments(&self) -> Distribution {
        let mut buckets = [0u32; 4];
        for (_, p, w) in self.weighted() {
            let slot = match self.attributes.get(p.sign).temperament {
                Temperament::Choleric => 0,
                Temperament::Melancholic => 1,
                Temperament::Sanguine => 2,
                Temperament::Phlegmatic => 3,
            };
            buckets[slot] += w;
        }
        Distribution::from_buckets(
            &["Choleric", "Melancholic", "Sanguine", "Phlegmatic"],
            &buckets,
        )
    }

    pub fn elements(&self) -> Distribution {
        let mut buckets = [0u32; 4];
        for (_, p, w) in self.weighted() {
            let slot = match self.attributes.get(p.sign).element {
                Element::Fire => 0,
                Element::Earth => 1,
                Element::Air => 2,
                Element::Water => 3,
            };
            buckets[slot] += w;
        }
        Distribution::from_buckets(&["Fire", "Earth", "Air", "Water"], &buckets)
    }

    pub fn modalities(&self) -> Distribution {
        let mut buckets = [0u32; 3];
        for (_, p, w) in self.weighted() {
            let slot = match self.attributes.get(p.sign).modality {
                Modality::Cardinal => 0,
                Modality::Fixed => 1,
                Modality::Mutable => 2,
            };
            buckets[slot] += w;
        }
        Distribution::from_buckets(&["Cardinal", "Fixed", "Mutable"], &buckets)
    }

    pub fn polarities(&self) -> Distribution {
        let mut buckets = [0u32; 2];
        for (_, p, w) in self.weighted() {
            match self.attributes.get(p.sign).polarity {
                Polarity::Yang => buckets[0] += w,
                Polarity::Yin => buckets[1] += w,
            }
        }
        Distribution::from_buckets(&["Yang", "Yin"], &buckets)
    }
}

/// The two quality axes and their crossed four-way split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualitiesBreakdown {
    pub temperature: Distribution,
    pub moisture: Distribution,
    pub primitive: Distribution,
}

impl QualitiesBreakdown {
    /// One-line status combining the leaning side of each axis, with
    /// ties going to Hot and Wet.
    pub fn combined_label(&self) -> String {
        let hot = self.temperature.entries()[0].1;
        let wet = self.moisture.entries()[0].1;
        let temp = if hot >= 50 { "Hot" } else { "Cold" };
        let moist = if wet >= 50 { "Wet" } else { "Dry" };
        format!("{temp} & {moist}")
    }
}
