//! Appliance - a household appliance whose paperwork is being kept.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::foundation::{
    fields, text_enum, ApplianceId, TenantId, Timestamp, UserId, ValidationError,
};

pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_BRAND_LENGTH: usize = 100;
pub const MAX_MODEL_LENGTH: usize = 100;
pub const MAX_SERIAL_LENGTH: usize = 100;

text_enum!(
    ApplianceType {
        Refrigerator => "refrigerator",
        Oven => "oven",
        Dishwasher => "dishwasher",
        WasherDryer => "washer_dryer",
        Microwave => "microwave",
        AirConditioner => "air_conditioner",
        WaterHeater => "water_heater",
        Furnace => "furnace",
        Other => "other",
    }
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplianceDetails {
    pub name: String,
    pub appliance_type: ApplianceType,
    pub brand: Option<String>,
    pub model_number: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<Decimal>,
}

impl ApplianceDetails {
    fn validated(self) -> Result<Self, ValidationError> {
        let purchase_price = self
            .purchase_price
            .map(|price| fields::non_negative_amount("purchase_price", price))
            .transpose()?;

        Ok(Self {
            name: fields::required_text("name", &self.name, MAX_NAME_LENGTH)?,
            appliance_type: self.appliance_type,
            brand: fields::optional_text("brand", self.brand, MAX_BRAND_LENGTH)?,
            model_number: fields::optional_text("model_number", self.model_number, MAX_MODEL_LENGTH)?,
            serial_number: fields::optional_text(
                "serial_number",
                self.serial_number,
                MAX_SERIAL_LENGTH,
            )?,
            purchase_date: self.purchase_date,
            purchase_price,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appliance {
    id: ApplianceId,
    tenant_id: TenantId,
    user_id: UserId,
    details: ApplianceDetails,
    created_at: Timestamp,
}

impl Appliance {
    pub fn new(
        id: ApplianceId,
        tenant_id: TenantId,
        user_id: UserId,
        details: ApplianceDetails,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            tenant_id,
            user_id,
            details: details.validated()?,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: ApplianceId,
        tenant_id: TenantId,
        user_id: UserId,
        details: ApplianceDetails,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            tenant_id,
            user_id,
            details,
            created_at,
        }
    }

    // ─── Accessors ───

    pub fn id(&self) -> ApplianceId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn details(&self) -> &ApplianceDetails {
        &self.details
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn appliance_type(&self) -> ApplianceType {
        self.details.appliance_type
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    // ─── Mutations ───

    pub fn update(&mut self, details: ApplianceDetails) -> Result<(), ValidationError> {
        self.details = details.validated()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ApplianceDetails {
        ApplianceDetails {
            name: "Kitchen fridge".to_string(),
            appliance_type: ApplianceType::Refrigerator,
            brand: Some("Samsung".to_string()),
            model_number: Some("RF28R7351SR".to_string()),
            serial_number: None,
            purchase_date: NaiveDate::from_ymd_opt(2023, 5, 1),
            purchase_price: Some(Decimal::new(249_900, 2)),
        }
    }

    #[test]
    fn new_keeps_fields() {
        let a = Appliance::new(ApplianceId::new(), TenantId::DEFAULT, UserId::new(), details())
            .unwrap();
        assert_eq!(a.name(), "Kitchen fridge");
        assert_eq!(a.appliance_type(), ApplianceType::Refrigerator);
        assert_eq!(a.details().purchase_price, Some(Decimal::new(249_900, 2)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let result = Appliance::new(
            ApplianceId::new(),
            TenantId::DEFAULT,
            UserId::new(),
            ApplianceDetails {
                purchase_price: Some(Decimal::new(-1, 0)),
                ..details()
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn name_is_required() {
        let result = Appliance::new(
            ApplianceId::new(),
            TenantId::DEFAULT,
            UserId::new(),
            ApplianceDetails {
                name: String::new(),
                ..details()
            },
        );
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }
}
