use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        BandId, MemberRole, MemberStatus, MembershipId, NotificationKind, Timestamp, UserId,
    },
    error::ActionDecodeError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUser {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
}

/// One user's membership in one band. `user` is only present when the
/// membership was fetched with user details populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandMember {
    pub id: MembershipId,
    pub user_id: UserId,
    pub band_id: BandId,
    pub role: MemberRole,
    pub status: MemberStatus,
    pub join_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<MemberUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Band {
    pub id: BandId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub created_by_id: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// `None` means membership has not been loaded for this band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<BandMember>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum BandAction {
    SetBands(Vec<Band>),
    SetCurrentBand(Band),
    ClearCurrentBand,
    SetUserBands(Vec<Band>),
    AddBand(Band),
    UpdateBand(Band),
    RemoveBand(BandId),
    SetError(Option<String>),
    SetLoading(bool),
}

impl BandAction {
    pub fn name(&self) -> &'static str {
        match self {
            BandAction::SetBands(_) => "set_bands",
            BandAction::SetCurrentBand(_) => "set_current_band",
            BandAction::ClearCurrentBand => "clear_current_band",
            BandAction::SetUserBands(_) => "set_user_bands",
            BandAction::AddBand(_) => "add_band",
            BandAction::UpdateBand(_) => "update_band",
            BandAction::RemoveBand(_) => "remove_band",
            BandAction::SetError(_) => "set_error",
            BandAction::SetLoading(_) => "set_loading",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum UiAction {
    SetLoading(bool),
    ShowNotification {
        message: String,
        #[serde(rename = "type")]
        kind: NotificationKind,
    },
    HideNotification,
    ToggleSidebar,
    SetSidebarOpen(bool),
    ToggleDarkMode,
    SetDarkMode(bool),
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::SetLoading(_) => "set_loading",
            UiAction::ShowNotification { .. } => "show_notification",
            UiAction::HideNotification => "hide_notification",
            UiAction::ToggleSidebar => "toggle_sidebar",
            UiAction::SetSidebarOpen(_) => "set_sidebar_open",
            UiAction::ToggleDarkMode => "toggle_dark_mode",
            UiAction::SetDarkMode(_) => "set_dark_mode",
        }
    }
}

/// Root action routed by the store to exactly one slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum AppAction {
    Bands(BandAction),
    Ui(UiAction),
}

impl From<BandAction> for AppAction {
    fn from(value: BandAction) -> Self {
        AppAction::Bands(value)
    }
}

impl From<UiAction> for AppAction {
    fn from(value: UiAction) -> Self {
        AppAction::Ui(value)
    }
}

/// Decodes a JSON-lines action log. Blank lines and `#` comments are skipped;
/// line numbers in errors are 1-based.
pub fn decode_action_log(raw: &str) -> Result<Vec<AppAction>, ActionDecodeError> {
    raw.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            serde_json::from_str(line).map_err(|source| ActionDecodeError::new(line_no, source))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn band(id: &str) -> Band {
        Band {
            id: BandId::from(id),
            name: "The Pacers".to_string(),
            description: None,
            logo_url: None,
            created_by_id: UserId::from("u1"),
            created_at: Timestamp::from("2024-03-01T12:00:00Z"),
            updated_at: Timestamp::from("2024-03-02T08:30:00Z"),
            members: None,
        }
    }

    #[test]
    fn band_uses_camel_case_and_omits_absent_fields() {
        let value = serde_json::to_value(band("b1")).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": "b1",
                "name": "The Pacers",
                "createdById": "u1",
                "createdAt": "2024-03-01T12:00:00Z",
                "updatedAt": "2024-03-02T08:30:00Z",
            })
        );
    }

    #[test]
    fn band_timestamps_round_trip_verbatim() {
        let raw = json!({
            "id": "b1",
            "name": "The Pacers",
            "createdById": "u1",
            "createdAt": "2024-01-15T09:00:00.000+02:00",
            "updatedAt": "2024-01-15",
        });
        let decoded: Band = serde_json::from_value(raw.clone()).expect("decode band");
        assert_eq!(decoded.updated_at.as_str(), "2024-01-15");
        assert_eq!(serde_json::to_value(&decoded).expect("serialize"), raw);
    }

    #[test]
    fn decodes_member_with_embedded_user() {
        let member: BandMember = serde_json::from_value(json!({
            "id": "m1",
            "userId": "u2",
            "bandId": "b1",
            "role": "ADMIN",
            "status": "PENDING",
            "joinDate": "2024-05-10T18:00:00Z",
            "user": {
                "id": "u2",
                "firstName": "Ritsu",
                "lastName": "Tainaka",
                "email": "ritsu@example.com",
                "instrument": "Drums"
            }
        }))
        .expect("decode member");

        assert_eq!(member.role, MemberRole::Admin);
        assert_eq!(member.status, MemberStatus::Pending);
        let user = member.user.expect("user details");
        assert_eq!(user.instrument.as_deref(), Some("Drums"));
        assert_eq!(user.profile_picture_url, None);
    }

    #[test]
    fn member_without_user_details_is_valid() {
        let member: BandMember = serde_json::from_value(json!({
            "id": "m1",
            "userId": "u2",
            "bandId": "b1",
            "role": "MEMBER",
            "status": "ACTIVE",
            "joinDate": "2024-05-10T18:00:00Z"
        }))
        .expect("decode member");
        assert!(member.user.is_none());
    }

    #[test]
    fn actions_are_adjacently_tagged() {
        let action = AppAction::from(BandAction::RemoveBand(BandId::from("b7")));
        assert_eq!(
            serde_json::to_value(&action).expect("serialize"),
            json!({"type": "bands", "payload": {"type": "remove_band", "payload": "b7"}})
        );

        let decoded: AppAction = serde_json::from_value(json!({
            "type": "ui",
            "payload": {
                "type": "show_notification",
                "payload": {"message": "Saved", "type": "success"}
            }
        }))
        .expect("decode");
        assert_eq!(
            decoded,
            AppAction::Ui(UiAction::ShowNotification {
                message: "Saved".to_string(),
                kind: NotificationKind::Success,
            })
        );
    }

    #[test]
    fn unit_actions_need_no_payload() {
        let decoded: AppAction =
            serde_json::from_str(r#"{"type":"ui","payload":{"type":"toggle_dark_mode"}}"#)
                .expect("decode");
        assert_eq!(decoded, AppAction::Ui(UiAction::ToggleDarkMode));
    }

    #[test]
    fn action_names_match_wire_tags() {
        let action = BandAction::SetError(None);
        let value = serde_json::to_value(&action).expect("serialize");
        assert_eq!(value["type"], action.name());

        let action = UiAction::SetSidebarOpen(true);
        let value = serde_json::to_value(&action).expect("serialize");
        assert_eq!(value["type"], action.name());
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let raw = "# warm up\n\n{\"type\":\"ui\",\"payload\":{\"type\":\"toggle_sidebar\"}}\n";
        let actions = decode_action_log(raw).expect("decode log");
        assert_eq!(actions, vec![AppAction::Ui(UiAction::ToggleSidebar)]);
    }

    #[test]
    fn reports_line_number_of_malformed_entry() {
        let raw = "{\"type\":\"ui\",\"payload\":{\"type\":\"toggle_sidebar\"}}\n\n{\"type\":\"bogus\"}\n";
        let err = decode_action_log(raw).expect_err("should fail");
        assert_eq!(err.line, 3);
        assert!(err.to_string().starts_with("malformed action on line 3"));
    }
}
