use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::timestamp;

/// Status value marking a banner as eligible for display.
pub const ACTIVE_STATUS: &str = "active";

/// Promotional banner shown in a page region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    /// Unique identifier of the banner.
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    /// Call-to-action button label.
    pub cta_text: String,
    /// Call-to-action target.
    pub cta_link: String,
    /// Page region, e.g. "hero" or "dashboard". Free-form.
    pub placement: String,
    /// Lower values display first.
    pub priority: i32,
    /// Free-form; only the exact value `"active"` is displayed.
    pub status: String,
    /// Presentation gradient token.
    pub color: String,
    #[serde(with = "timestamp::iso8601")]
    pub created_at: DateTime<Utc>,
}

impl Banner {
    /// Whether the banner belongs in the display feed for `placement`.
    ///
    /// Placement compares case-insensitively, status case-sensitively.
    pub fn is_displayed_in(&self, placement: &str) -> bool {
        self.status == ACTIVE_STATUS && self.placement.to_lowercase() == placement.to_lowercase()
    }
}

/// Payload required to insert a new banner.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBanner {
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_link: String,
    pub placement: String,
    pub priority: i32,
    pub status: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl NewBanner {
    /// Build an active banner payload stamped with the current time.
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        cta_text: impl Into<String>,
        cta_link: impl Into<String>,
        placement: impl Into<String>,
        priority: i32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            cta_text: cta_text.into(),
            cta_link: cta_link.into(),
            placement: placement.into(),
            priority,
            status: ACTIVE_STATUS.to_string(),
            color: color.into(),
            created_at: timestamp::now(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// Partial patch applied to an existing banner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBanner {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub placement: Option<String>,
    pub priority: Option<i32>,
    pub status: Option<String>,
    pub color: Option<String>,
}

impl UpdateBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subtitle.is_none()
            && self.cta_text.is_none()
            && self.cta_link.is_none()
            && self.placement.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.color.is_none()
    }
}

/// Order banners for display: ascending priority, newest first on ties.
pub fn sort_for_display(banners: &mut [Banner]) {
    banners.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn banner(id: i32, placement: &str, status: &str, priority: i32, day: u32) -> Banner {
        Banner {
            id,
            title: format!("Banner {id}"),
            subtitle: "subtitle".to_string(),
            cta_text: "Shop".to_string(),
            cta_link: "/dashboard".to_string(),
            placement: placement.to_string(),
            priority,
            status: status.to_string(),
            color: "from-blue-500 to-cyan-500".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 2, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn placement_match_ignores_case_but_status_does_not() {
        assert!(banner(1, "Hero", "active", 1, 1).is_displayed_in("hero"));
        assert!(banner(1, "hero", "active", 1, 1).is_displayed_in("HERO"));
        assert!(!banner(1, "hero", "Active", 1, 1).is_displayed_in("hero"));
        assert!(!banner(1, "dashboard", "active", 1, 1).is_displayed_in("hero"));
    }

    #[test]
    fn display_order_is_priority_then_newest() {
        let mut items = vec![
            banner(1, "hero", "active", 2, 1),
            banner(2, "hero", "active", 1, 1),
            banner(3, "hero", "active", 1, 5),
        ];

        sort_for_display(&mut items);

        let ids: Vec<i32> = items.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn serializes_cta_fields_in_camel_case() {
        let json = serde_json::to_value(banner(4, "hero", "active", 0, 2)).unwrap();
        assert_eq!(json["ctaText"], "Shop");
        assert_eq!(json["ctaLink"], "/dashboard");
        assert_eq!(json["priority"], 0);
    }
}
