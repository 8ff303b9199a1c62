use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Barrister API",
        version = "0.1.0",
        description = "Cases, financial transactions, and firm settings for a law-firm back office."
    ),
    paths(
        crate::routes::cases::get_cases,
        crate::routes::cases::create_case,
        crate::routes::cases::update_case,
        crate::routes::cases::delete_case,
        crate::routes::financial::get_transactions,
        crate::routes::financial::create_transaction,
        crate::routes::financial::delete_transaction,
        crate::routes::settings::get_settings,
        crate::routes::settings::upsert_settings,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::CreateCaseRequest,
        crate::dto::UpdateCaseRequest,
        crate::dto::CaseResponse,
        crate::dto::CaseLookup,
        crate::dto::CreateTransactionRequest,
        crate::dto::TransactionResponse,
        crate::dto::TransactionLookup,
        crate::dto::SettingsRequest,
        crate::dto::SettingsResponse,
        crate::dto::CreatedResponse,
        crate::dto::OkResponse,
        crate::dto::ErrorResponse,
        crate::dto::Violation,
        crate::dto::ValidationErrorResponse,
        crate::dto::HealthResponse,
    )),
    tags(
        (name = "cases", description = "Legal case records"),
        (name = "financial", description = "Financial transaction ledger"),
        (name = "settings", description = "Firm branding settings"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
