use serde::Deserialize;

use crate::domain::banner::{NewBanner, UpdateBanner};
use crate::forms::{FormError, FormResult, non_blank};

pub const REQUIRED_BANNER_FIELDS: &str =
    "Title, subtitle, ctaText, ctaLink, placement, priority, and color are required";

/// Body of `POST /banners`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBannerPayload {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub placement: Option<String>,
    /// Required, zero included.
    pub priority: Option<i32>,
    pub status: Option<String>,
    pub color: Option<String>,
}

impl AddBannerPayload {
    pub fn into_new_banner(self) -> FormResult<NewBanner> {
        let (
            Some(title),
            Some(subtitle),
            Some(cta_text),
            Some(cta_link),
            Some(placement),
            Some(priority),
            Some(color),
        ) = (
            non_blank(self.title),
            non_blank(self.subtitle),
            non_blank(self.cta_text),
            non_blank(self.cta_link),
            non_blank(self.placement),
            self.priority,
            non_blank(self.color),
        )
        else {
            return Err(FormError::MissingFields(REQUIRED_BANNER_FIELDS));
        };

        let mut banner = NewBanner::new(
            title, subtitle, cta_text, cta_link, placement, priority, color,
        );
        if let Some(status) = non_blank(self.status) {
            banner = banner.with_status(status);
        }

        Ok(banner)
    }
}

/// Body of `PUT /banners/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditBannerPayload {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub placement: Option<String>,
    pub priority: Option<i32>,
    pub status: Option<String>,
    pub color: Option<String>,
}

impl EditBannerPayload {
    pub fn into_update_banner(self) -> UpdateBanner {
        UpdateBanner {
            title: non_blank(self.title),
            subtitle: non_blank(self.subtitle),
            cta_text: non_blank(self.cta_text),
            cta_link: non_blank(self.cta_link),
            placement: non_blank(self.placement),
            priority: self.priority,
            status: non_blank(self.status),
            color: non_blank(self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::banner::ACTIVE_STATUS;

    fn payload() -> AddBannerPayload {
        AddBannerPayload {
            title: Some("LIMITED TIME: 90% OFF".to_string()),
            subtitle: Some("Instant access".to_string()),
            cta_text: Some("Get Access".to_string()),
            cta_link: Some("/dashboard".to_string()),
            placement: Some(" Hero ".to_string()),
            priority: Some(0),
            status: None,
            color: Some("from-orange-500 to-red-500".to_string()),
        }
    }

    #[test]
    fn zero_priority_is_accepted_and_status_defaults() {
        let banner = payload().into_new_banner().unwrap();

        assert_eq!(banner.priority, 0);
        assert_eq!(banner.placement, "Hero");
        assert_eq!(banner.status, ACTIVE_STATUS);
    }

    #[test]
    fn missing_priority_is_rejected() {
        let mut missing = payload();
        missing.priority = None;

        assert!(matches!(
            missing.into_new_banner(),
            Err(FormError::MissingFields(REQUIRED_BANNER_FIELDS))
        ));
    }

    #[test]
    fn explicit_status_is_kept_verbatim() {
        let mut inactive = payload();
        inactive.status = Some("Inactive".to_string());

        assert_eq!(inactive.into_new_banner().unwrap().status, "Inactive");
    }

    #[test]
    fn edit_payload_keeps_zero_priority() {
        let payload: EditBannerPayload =
            serde_json::from_str(r#"{"priority": 0, "ctaText": " Go "}"#).unwrap();

        let update = payload.into_update_banner();

        assert_eq!(update.priority, Some(0));
        assert_eq!(update.cta_text.as_deref(), Some("Go"));
        assert!(update.title.is_none());
    }
}
