//! Login and signup endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use validator::Validate;

use crate::app::AppState;
use crate::model::{Beneficiary, BeneficiaryDetails, NewUser, Role, Shop, User};
use crate::store::RecordStore;

use super::error::AppError;
use super::extract::json_object;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    email: String,
    #[validate(length(min = 1))]
    password: String,
    role: Role,
}

/// Logged in user as returned to the client, with role specific extras
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(flatten)]
    user: User,
    /// Client route for the user's dashboard
    dashboard: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    shop: Option<Shop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    beneficiary: Option<Beneficiary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assigned_shop: Option<Shop>,
}

impl UserProfile {
    fn build(store: &RecordStore, user: User) -> Self {
        let mut profile = UserProfile {
            dashboard: user.role.dashboard_path(),
            shop: None,
            beneficiary: None,
            assigned_shop: None,
            user,
        };

        match profile.user.role {
            Role::Beneficiary => {
                if let Some(beneficiary) = store.beneficiary_by_user_id(&profile.user.id) {
                    profile.assigned_shop = store.get_shop(&beneficiary.shop_id);
                    profile.beneficiary = Some(beneficiary);
                }
            }
            Role::Shop => {
                profile.shop = profile.user.shop_id.as_deref().and_then(|id| store.get_shop(id));
            }
            Role::Admin => {}
        }

        profile
    }
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UserProfile>, AppError> {
    const INVALID: &str = "Invalid request data";
    let req: LoginRequest = json_object(payload, INVALID)?;
    req.validate()
        .map_err(|_| AppError::BadRequest(INVALID.to_string()))?;

    let user = match state.store.get_user_by_email_and_role(&req.email, req.role) {
        Some(user) if user.password == req.password => user,
        _ => {
            warn!(email = %req.email, role = ?req.role, "Rejected login");
            return Err(AppError::Unauthorized);
        }
    };

    info!(user_id = %user.id, role = ?user.role, "User logged in");
    Ok(Json(UserProfile::build(&state.store, user)))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    name: String,
    #[validate(email)]
    email: String,
    #[validate(length(min = 1))]
    password: String,
    role: Role,
    #[serde(default)]
    shop_id: Option<String>,
    #[serde(default)]
    ration_card_number: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1))]
    family_size: Option<u32>,
}

impl SignupRequest {
    /// Ration card details, required for beneficiaries and ignored otherwise
    fn beneficiary_details(&self) -> Result<Option<BeneficiaryDetails>, AppError> {
        if self.role != Role::Beneficiary {
            return Ok(None);
        }

        let missing = |field: &str| AppError::BadRequest(format!("Missing {field}"));
        let shop_id = non_empty(&self.shop_id).ok_or_else(|| missing("shopId"))?;
        let card = non_empty(&self.ration_card_number).ok_or_else(|| missing("rationCardNumber"))?;
        let family_size = self.family_size.ok_or_else(|| missing("familySize"))?;

        Ok(Some(BeneficiaryDetails {
            shop_id: shop_id.to_string(),
            ration_card_number: card.to_string(),
            family_size,
        }))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<UserProfile>), AppError> {
    const INVALID: &str = "Invalid signup data";
    let req: SignupRequest = json_object(payload, INVALID)?;
    req.validate()
        .map_err(|_| AppError::BadRequest(INVALID.to_string()))?;

    let details = req.beneficiary_details()?;
    let new_user = NewUser {
        email: req.email,
        password: req.password,
        role: req.role,
        name: req.name,
        shop_id: non_empty(&req.shop_id).map(str::to_string),
    };

    let (user, _) = state.store.create_account(new_user, details)?;
    info!(user_id = %user.id, role = ?user.role, "Account created");

    Ok((StatusCode::CREATED, Json(UserProfile::build(&state.store, user))))
}
