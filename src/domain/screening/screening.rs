//! Screening - a recurring preventive health check a user keeps up with.

use chrono::{Months, NaiveDate};

use crate::domain::foundation::{
    fields, text_enum, ScreeningId, TenantId, Timestamp, UserId, ValidationError,
};

pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_PROVIDER_LENGTH: usize = 200;
pub const MAX_NOTES_LENGTH: usize = 2000;
pub const MIN_FREQUENCY_MONTHS: u32 = 1;
pub const MAX_FREQUENCY_MONTHS: u32 = 120;

text_enum!(
    /// Kind of preventive screening.
    ScreeningType {
        PhysicalExam => "physical_exam",
        DentalCheckup => "dental_checkup",
        VisionTest => "vision_test",
        BloodWork => "blood_work",
        Mammogram => "mammogram",
        Colonoscopy => "colonoscopy",
        SkinCheck => "skin_check",
        BoneDensity => "bone_density",
        Other => "other",
    }
);

/// Editable fields of a screening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningDetails {
    pub screening_type: ScreeningType,
    pub name: String,
    pub recommended_frequency_months: u32,
    pub last_screening_date: Option<NaiveDate>,
    pub next_due_date: Option<NaiveDate>,
    pub provider: Option<String>,
    pub notes: Option<String>,
}

impl ScreeningDetails {
    /// Normalizes text fields and derives the next due date.
    ///
    /// When a last screening date is known the due date is always
    /// recomputed from it; a submitted due date is only kept otherwise.
    fn validated(self) -> Result<Self, ValidationError> {
        let name = fields::required_text("name", &self.name, MAX_NAME_LENGTH)?;
        let provider = fields::optional_text("provider", self.provider, MAX_PROVIDER_LENGTH)?;
        let notes = fields::optional_text("notes", self.notes, MAX_NOTES_LENGTH)?;

        let months = self.recommended_frequency_months;
        if !(MIN_FREQUENCY_MONTHS..=MAX_FREQUENCY_MONTHS).contains(&months) {
            return Err(ValidationError::out_of_range(
                "recommended_frequency_months",
                MIN_FREQUENCY_MONTHS as i64,
                MAX_FREQUENCY_MONTHS as i64,
                months as i64,
            ));
        }

        let next_due_date = match self.last_screening_date {
            Some(last) => Some(next_due_after(last, months)?),
            None => self.next_due_date,
        };

        Ok(Self {
            screening_type: self.screening_type,
            name,
            recommended_frequency_months: months,
            last_screening_date: self.last_screening_date,
            next_due_date,
            provider,
            notes,
        })
    }
}

fn next_due_after(last: NaiveDate, months: u32) -> Result<NaiveDate, ValidationError> {
    last.checked_add_months(Months::new(months)).ok_or_else(|| {
        ValidationError::invalid_format("last_screening_date", "next due date is out of range")
    })
}

/// A recurring screening tracked for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screening {
    id: ScreeningId,
    tenant_id: TenantId,
    user_id: UserId,
    details: ScreeningDetails,
    created_at: Timestamp,
}

impl Screening {
    pub fn new(
        id: ScreeningId,
        tenant_id: TenantId,
        user_id: UserId,
        details: ScreeningDetails,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            tenant_id,
            user_id,
            details: details.validated()?,
            created_at: Timestamp::now(),
        })
    }

    /// Rebuilds a screening from storage without re-validating.
    pub fn reconstitute(
        id: ScreeningId,
        tenant_id: TenantId,
        user_id: UserId,
        details: ScreeningDetails,
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

    pub fn id(&self) -> ScreeningId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn details(&self) -> &ScreeningDetails {
        &self.details
    }

    pub fn screening_type(&self) -> ScreeningType {
        self.details.screening_type
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn recommended_frequency_months(&self) -> u32 {
        self.details.recommended_frequency_months
    }

    pub fn last_screening_date(&self) -> Option<NaiveDate> {
        self.details.last_screening_date
    }

    pub fn next_due_date(&self) -> Option<NaiveDate> {
        self.details.next_due_date
    }

    pub fn provider(&self) -> Option<&str> {
        self.details.provider.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.details.notes.as_deref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// True when the next due date has passed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.details.next_due_date.is_some_and(|due| due < today)
    }

    // ─── Mutations ───

    pub fn update(&mut self, details: ScreeningDetails) -> Result<(), ValidationError> {
        self.details = details.validated()?;
        Ok(())
    }

    /// Records a completed screening and rolls the due date forward.
    pub fn record_completed(&mut self, completed_on: NaiveDate) -> Result<(), ValidationError> {
        let next = next_due_after(completed_on, self.details.recommended_frequency_months)?;
        self.details.last_screening_date = Some(completed_on);
        self.details.next_due_date = Some(next);
        Ok(())
    }
}
