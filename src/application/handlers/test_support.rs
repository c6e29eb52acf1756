//! Shared fixtures for handler tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::billing::{BillDetails, BillStatus, BillingFrequency, PaymentDetails};
use crate::domain::foundation::{
    ApplianceId, BillId, CommandMetadata, ScreeningId, TaxYearId, TenantId, Timestamp, UserId,
};
use crate::domain::screening::{
    AppointmentDetails, ReminderDetails, ScreeningDetails, ScreeningType,
};
use crate::domain::tax::{DeductionCategory, DeductionDetails, TaxYearDetails};
use crate::domain::warranty::{
    ApplianceDetails, ApplianceType, ManualDetails, ServiceRecordDetails, WarrantyDetails,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn metadata() -> CommandMetadata {
    CommandMetadata::test_fixture().with_correlation_id("test-correlation")
}

pub fn metadata_in(tenant_id: TenantId) -> CommandMetadata {
    CommandMetadata::new(UserId::new(), tenant_id)
}

pub fn screening_details(name: &str) -> ScreeningDetails {
    ScreeningDetails {
        screening_type: ScreeningType::DentalCheckup,
        name: name.to_string(),
        recommended_frequency_months: 6,
        last_screening_date: None,
        next_due_date: Some(date(2025, 3, 1)),
        provider: Some("Dr. Smith".to_string()),
        notes: None,
    }
}

pub fn appointment_details(screening_id: ScreeningId) -> AppointmentDetails {
    AppointmentDetails {
        screening_id,
        appointment_date: Timestamp::now(),
        location: Some("Main St Clinic".to_string()),
        provider: None,
        notes: None,
    }
}

pub fn reminder_details(screening_id: ScreeningId, on: NaiveDate) -> ReminderDetails {
    ReminderDetails {
        screening_id,
        reminder_date: on,
        message: Some("Book the cleaning".to_string()),
    }
}

pub fn appliance_details(name: &str) -> ApplianceDetails {
    ApplianceDetails {
        name: name.to_string(),
        appliance_type: ApplianceType::Dishwasher,
        brand: Some("Bosch".to_string()),
        model_number: None,
        serial_number: None,
        purchase_date: Some(date(2023, 6, 1)),
        purchase_price: Some(Decimal::new(79_900, 2)),
    }
}

pub fn warranty_details(
    appliance_id: ApplianceId,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> WarrantyDetails {
    WarrantyDetails {
        appliance_id,
        provider: "Bosch".to_string(),
        start_date: start,
        end_date: end,
        coverage_details: None,
        document_url: None,
    }
}

pub fn manual_details(appliance_id: ApplianceId, title: &str) -> ManualDetails {
    ManualDetails {
        appliance_id,
        title: title.to_string(),
        file_url: "https://files.example.com/manual.pdf".to_string(),
        file_type: Some("pdf".to_string()),
    }
}

pub fn service_record_details(appliance_id: ApplianceId, on: NaiveDate) -> ServiceRecordDetails {
    ServiceRecordDetails {
        appliance_id,
        service_date: on,
        service_provider: Some("ABC Appliance Repair".to_string()),
        description: Some("Replaced door seal".to_string()),
        cost: Some(Decimal::new(17_500, 2)),
    }
}

pub fn bill_details(name: &str, amount: Decimal) -> BillDetails {
    BillDetails {
        name: name.to_string(),
        payee: Some("City Utilities".to_string()),
        amount,
        due_date: date(2025, 2, 1),
        billing_frequency: BillingFrequency::Monthly,
        status: BillStatus::Pending,
        notes: None,
    }
}

pub fn payment_details(bill_id: BillId, amount: Decimal, on: NaiveDate) -> PaymentDetails {
    PaymentDetails {
        bill_id,
        amount,
        payment_date: on,
        payment_method: None,
        confirmation_number: None,
        notes: None,
    }
}

pub fn tax_year_details(year: i32) -> TaxYearDetails {
    TaxYearDetails { year, notes: None }
}

pub fn deduction_details(tax_year_id: TaxYearId, amount: Decimal, on: NaiveDate) -> DeductionDetails {
    DeductionDetails {
        tax_year_id,
        description: "Food bank donation".to_string(),
        amount,
        date: on,
        category: DeductionCategory::CharitableDonations,
        notes: None,
        has_receipt: true,
    }
}
