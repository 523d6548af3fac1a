//! Google My Business location insights.

use crate::{Fields, MetricMapper};
use tessera_core::{KnownPlatform, MetricCounts, PlatformId, RawPlatformPayload};

const IMPRESSION_FIELDS: [&str; 4] = [
    "businessImpressionsDesktopSearch",
    "businessImpressionsMobileSearch",
    "businessImpressionsDesktopMaps",
    "businessImpressionsMobileMaps",
];

/// Views are the four impression counters summed; engagement is call and
/// website clicks.
#[derive(Debug, Clone, Copy, Default)]
pub struct GmbMapper;

impl MetricMapper for GmbMapper {
    fn platform(&self) -> PlatformId {
        KnownPlatform::Gmb.into()
    }

    fn extract(&self, raw: &RawPlatformPayload) -> MetricCounts {
        let fields = Fields::new(raw.as_value());
        MetricCounts {
            views: fields.sum(&IMPRESSION_FIELDS),
            engagement: fields.sum(&["callClicks", "websiteClicks"]),
            ..Default::default()
        }
    }
}
