//! HTTP routes for tax year and deduction endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_deduction, create_tax_year, delete_deduction, delete_tax_year, get_deduction,
    get_tax_year, list_deductions, list_tax_years, mark_tax_year_filed, update_deduction,
    update_tax_year, TaxHandlers,
};

/// Routes mounted at `/api/tax-years`.
pub fn tax_year_routes(handlers: TaxHandlers) -> Router {
    Router::new()
        .route("/", post(create_tax_year).get(list_tax_years))
        .route(
            "/:id",
            get(get_tax_year).put(update_tax_year).delete(delete_tax_year),
        )
        .route("/:id/file", post(mark_tax_year_filed))
        .with_state(handlers)
}

/// Routes mounted at `/api/deductions`.
pub fn deduction_routes(handlers: TaxHandlers) -> Router {
    Router::new()
        .route("/", post(create_deduction).get(list_deductions))
        .route(
            "/:id",
            get(get_deduction)
                .put(update_deduction)
                .delete(delete_deduction),
        )
        .with_state(handlers)
}
