//! Input validation helpers
//!
//! Handlers turn wire payloads (all-optional fields) into validated inputs
//! here before calling a service.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::money::{self, DECIMAL_PLACES, MAX_AMOUNT};
use shared::models::{
    AccountUpdate, AttendanceUpdate, ClockInRequest, LoginRequest, RegisterRequest, ReportCreate,
    ReportDraft, Role, StockCreate, StockDraft,
};

use crate::services::account::{AccountChanges, Credentials, Registration};
use crate::services::attendance::ClockIn;
use crate::utils::time;

// ── Text length limits ──────────────────────────────────────────────

/// Names: account, item, category, transaction type
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions and weather labels
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MIN_PASSWORD_LEN: usize = 8;

// ── Generic helpers ─────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Take a required text field, trimmed
fn required_text(value: Option<String>, field: &str, max_len: usize) -> AppResult<String> {
    let value = value.ok_or_else(|| AppError::required(field))?;
    validate_required_text(&value, field, max_len)?;
    Ok(value.trim().to_string())
}

fn required_value<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::required(field))
}

// ── Accounts ────────────────────────────────────────────────────────

/// Trim and lower-case an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Exact role name; anything else is rejected
pub fn parse_role(value: &str) -> AppResult<Role> {
    value.parse::<Role>().map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidRole,
            format!("invalid role: must be one of {}", role_list()),
        )
    })
}

fn role_list() -> String {
    Role::ALL
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn validate_email(email: &str) -> AppResult<()> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AppError::validation("email is not a valid address")),
    }
}

fn validate_password(password: &str) -> AppResult<()> {
    if password.is_empty() {
        return Err(AppError::required("password"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password is too long (max {MAX_PASSWORD_LEN})"
        )));
    }
    Ok(())
}

pub fn registration(req: RegisterRequest) -> AppResult<Registration> {
    let email = normalize_email(&required_text(req.email, "email", MAX_EMAIL_LEN)?);
    validate_email(&email)?;
    let password = required_value(req.password, "password")?;
    validate_password(&password)?;
    let name = required_text(req.name, "name", MAX_NAME_LEN)?;
    let role = parse_role(&required_text(req.role, "role", MAX_NAME_LEN)?)?;

    Ok(Registration {
        email,
        password,
        name,
        role,
    })
}

pub fn credentials(req: LoginRequest) -> AppResult<Credentials> {
    let email = normalize_email(&required_text(req.email, "email", MAX_EMAIL_LEN)?);
    let password = required_value(req.password, "password")?;
    if password.is_empty() {
        return Err(AppError::required("password"));
    }
    Ok(Credentials { email, password })
}

pub fn account_changes(req: AccountUpdate) -> AppResult<AccountChanges> {
    if req.is_empty() {
        return Err(AppError::validation(
            "at least one of email, password, name or role is required",
        ));
    }

    let email = match req.email {
        Some(email) => {
            let email = normalize_email(&email);
            validate_email(&email)?;
            Some(email)
        }
        None => None,
    };
    if let Some(password) = &req.password {
        validate_password(password)?;
    }
    let name = match req.name {
        Some(name) => {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            Some(name.trim().to_string())
        }
        None => None,
    };
    let role = req.role.as_deref().map(parse_role).transpose()?;

    Ok(AccountChanges {
        email,
        password: req.password,
        name,
        role,
    })
}

// ── Attendance ──────────────────────────────────────────────────────

fn validate_coordinate(value: f64, field: &str, limit: f64) -> AppResult<()> {
    if !value.is_finite() || value == 0.0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidCoordinates,
            format!("{field} is required and must be non-zero"),
        ));
    }
    if !(-limit..=limit).contains(&value) {
        return Err(AppError::with_message(
            ErrorCode::InvalidCoordinates,
            format!("{field} must be within [-{limit}, {limit}]"),
        ));
    }
    Ok(())
}

pub fn clock_in(req: ClockInRequest) -> AppResult<ClockIn> {
    let (Some(latitude), Some(longitude), Some(scheduled)) =
        (req.latitude, req.longitude, req.scheduled_time)
    else {
        return Err(AppError::validation(
            "latitude, longitude and scheduled_time are required",
        ));
    };
    validate_coordinate(latitude, "latitude", 90.0)?;
    validate_coordinate(longitude, "longitude", 180.0)?;
    let scheduled_time = time::parse_scheduled_time(&scheduled)?;

    Ok(ClockIn {
        latitude,
        longitude,
        scheduled_time,
    })
}

pub fn weather_update(req: AttendanceUpdate) -> AppResult<String> {
    let weather = required_text(req.weather, "weather", MAX_NOTE_LEN)?;
    Ok(weather)
}

// ── Stock ───────────────────────────────────────────────────────────

/// Check a complete draft (create, full update, or merged patch)
pub fn validate_stock_draft(draft: &StockDraft) -> AppResult<()> {
    validate_required_text(&draft.item_name, "item_name", MAX_NAME_LEN)?;
    validate_required_text(&draft.category, "category", MAX_NAME_LEN)?;
    if draft.quantity_sold < 0 {
        return Err(AppError::new(ErrorCode::StockInvalidQuantity));
    }
    if draft.unit_price < Decimal::ZERO {
        return Err(AppError::new(ErrorCode::StockInvalidPrice));
    }
    if !money::is_storable(draft.unit_price) {
        return Err(AppError::with_message(
            ErrorCode::StockInvalidPrice,
            format!(
                "unit_price must not exceed {MAX_AMOUNT} or have more than {DECIMAL_PLACES} decimal places"
            ),
        ));
    }
    if draft.total().is_none() {
        return Err(AppError::new(ErrorCode::StockTotalOutOfRange));
    }
    Ok(())
}

pub fn stock_draft(req: StockCreate) -> AppResult<StockDraft> {
    let draft = StockDraft {
        item_name: required_text(req.item_name, "item_name", MAX_NAME_LEN)?,
        quantity_sold: required_value(req.quantity_sold, "quantity_sold")?,
        category: required_text(req.category, "category", MAX_NAME_LEN)?,
        unit_price: required_value(req.unit_price, "unit_price")?,
    };
    validate_stock_draft(&draft)?;
    Ok(draft)
}

// ── Report ──────────────────────────────────────────────────────────

pub fn report_draft(req: ReportCreate) -> AppResult<ReportDraft> {
    validate_optional_text(&req.description, "description", MAX_NOTE_LEN)?;
    if let Some(amount) = req.amount
        && !money::is_storable(amount)
    {
        return Err(AppError::validation(format!(
            "amount must not exceed {MAX_AMOUNT} or have more than {DECIMAL_PLACES} decimal places"
        )));
    }
    Ok(ReportDraft {
        transaction_type: required_text(req.transaction_type, "transaction_type", MAX_NAME_LEN)?,
        transaction_category: required_text(
            req.transaction_category,
            "transaction_category",
            MAX_NAME_LEN,
        )?,
        amount: required_value(req.amount, "amount")?,
        description: req.description,
    })
}
