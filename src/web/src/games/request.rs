use crate::{ApiError, ApiResult};
use catalog::GameDraft;
use catalog::utils::text_or_number;
use serde::Deserialize;

/// Body of create and update requests.
///
/// `name` and `platform` are required; everything else may be omitted and is
/// stored as null (`isPublished` as false). Updates replace the whole record
/// with this body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRequest {
    #[serde(default, deserialize_with = "text_or_number")]
    pub publisher_id: Option<String>,
    pub name: Option<String>,
    pub platform: Option<String>,
    pub store_id: Option<String>,
    pub bundle_id: Option<String>,
    pub app_version: Option<String>,
    pub is_published: Option<bool>,
}

impl GameRequest {
    pub fn into_draft(self) -> ApiResult<GameDraft> {
        Ok(GameDraft {
            publisher_id: self.publisher_id,
            name: required("name", self.name)?,
            platform: required("platform", self.platform)?,
            store_id: self.store_id,
            bundle_id: self.bundle_id,
            app_version: self.app_version,
            is_published: self.is_published.unwrap_or(false),
            release_date: None,
        })
    }
}

fn required(field: &str, value: Option<String>) -> ApiResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::BadRequest(format!("Field '{}' is required", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_body_maps_to_draft() {
        let request: GameRequest = serde_json::from_str(
            r#"{
                "publisherId": "king",
                "name": "Candy Crush Saga",
                "platform": "ios",
                "storeId": "https://king.com",
                "bundleId": "com.king.ccs",
                "appVersion": "1.250.0",
                "isPublished": true
            }"#,
        )
        .unwrap();

        let draft = request.into_draft().unwrap();

        assert_eq!(draft.publisher_id.as_deref(), Some("king"));
        assert_eq!(draft.bundle_id.as_deref(), Some("com.king.ccs"));
        assert!(draft.is_published);
        assert_eq!(draft.release_date, None);
    }

    #[test]
    fn numeric_publisher_id_is_kept_as_text() {
        let request: GameRequest = serde_json::from_str(
            r#"{ "name": "Candy Crush Saga", "platform": "ios", "publisherId": 526656015 }"#,
        )
        .unwrap();

        let draft = request.into_draft().unwrap();

        assert_eq!(draft.publisher_id.as_deref(), Some("526656015"));
    }

    #[test]
    fn omitted_optional_fields_are_none() {
        let request: GameRequest =
            serde_json::from_str(r#"{ "name": "Among Us", "platform": "android" }"#).unwrap();

        let draft = request.into_draft().unwrap();

        assert_eq!(draft.store_id, None);
        assert_eq!(draft.app_version, None);
        assert!(!draft.is_published);
    }

    #[test]
    fn missing_or_blank_name_is_rejected() {
        let missing = GameRequest {
            platform: Some("ios".to_string()),
            ..Default::default()
        };
        let blank = GameRequest {
            name: Some("  ".to_string()),
            platform: Some("ios".to_string()),
            ..Default::default()
        };

        assert!(matches!(missing.into_draft(), Err(ApiError::BadRequest(_))));
        assert!(matches!(blank.into_draft(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn wrong_types_fail_to_deserialize() {
        let result = serde_json::from_str::<GameRequest>(
            r#"{ "name": "Among Us", "platform": "ios", "isPublished": "yes" }"#,
        );

        assert!(result.is_err());
    }
}
