use crate::models::{AnalysisResponse, BookSlotRequest, SlotsResponse};
use crate::routes::AppState;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// Configure booking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/slots", web::get().to(list_slots))
        .route("/slots/book", web::post().to(book_slot));
}

/// Open interview slots
///
/// GET /api/v1/slots
async fn list_slots(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(SlotsResponse {
        slots: state.analyzer.slots().available_slots(),
    })
}

/// Book an interview slot
///
/// POST /api/v1/slots/book
///
/// Request body:
/// ```json
/// {
///   "date": "2024-11-10",
///   "time": "09:00"
/// }
/// ```
async fn book_slot(state: web::Data<AppState>, req: web::Json<BookSlotRequest>) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(AnalysisResponse::Error {
            message: errors.to_string(),
        });
    }

    match state.analyzer.slots().reserve(&req.date, &req.time) {
        Ok(reservation) => HttpResponse::Ok().json(reservation),
        Err(e) => {
            tracing::info!("Booking rejected for {} {}: {}", req.date, req.time, e);
            HttpResponse::Conflict().json(AnalysisResponse::Error {
                message: e.to_string(),
            })
        }
    }
}
