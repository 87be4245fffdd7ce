use actix_web::{HttpResponse, web};

use crate::presentation::Presenter;

/// Budget snapshot as JSON: `{ "loading": bool, "data": BudgetData | null }`.
pub async fn budget(presenter: web::Data<Presenter>) -> HttpResponse {
    let data = presenter.snapshot();
    HttpResponse::Ok().json(serde_json::json!({
        "loading": data.is_none(),
        "data": data.as_deref(),
    }))
}
