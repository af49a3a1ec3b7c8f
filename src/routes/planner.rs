//! Trip planning wizard. The draft being built lives in the session
//! cookie and every step posts a partial update merged into it.

use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;
use validator::Validate;

use crate::SERVICE_ACCESS_ROLE;
use crate::auth::AuthenticatedUser;
use crate::domain::draft::{DraftPatch, DraftScheduleEntry, TripDraft};
use crate::domain::trip::TripType;
use crate::domain::wizard::{WizardMode, WizardStep, can_advance};
use crate::forms::planner::{
    AddActivityForm, BasicInfoForm, BudgetNotesForm, RemoveActivityForm, ReorderDestinationsForm,
    SubmitTripForm, ToggleDestinationForm,
};
use crate::models::config::ServerConfig;
use crate::repository::{DestinationListQuery, DestinationReader, DieselRepository};
use crate::routes::{base_context, ensure_role, redirect, render_template, server_error};
use crate::services::{ServiceError, catalog, planner};

const DRAFT_SESSION_KEY: &str = "trip_draft";
const MODE_SESSION_KEY: &str = "trip_draft_mode";

fn load_draft(session: &Session) -> TripDraft {
    session
        .get::<TripDraft>(DRAFT_SESSION_KEY)
        .ok()
        .flatten()
        .unwrap_or_default()
}

fn load_mode(session: &Session) -> WizardMode {
    session
        .get::<WizardMode>(MODE_SESSION_KEY)
        .ok()
        .flatten()
        .unwrap_or(WizardMode::Create)
}

fn store_draft(session: &Session, draft: &TripDraft) -> Result<(), HttpResponse> {
    session
        .insert(DRAFT_SESSION_KEY, draft)
        .map_err(|e| server_error("Failed to store draft in session", e))
}

fn store_mode(session: &Session, mode: WizardMode) -> Result<(), HttpResponse> {
    session
        .insert(MODE_SESSION_KEY, mode)
        .map_err(|e| server_error("Failed to store wizard mode in session", e))
}

fn clear_draft(session: &Session) {
    session.remove(DRAFT_SESSION_KEY);
    session.remove(MODE_SESSION_KEY);
}

fn step_url(step: WizardStep) -> String {
    format!("/planner/step/{}", step.number())
}

#[get("/planner/new")]
pub async fn new_trip(user: AuthenticatedUser, session: Session) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    if let Err(response) = store_draft(&session, &TripDraft::default()) {
        return response;
    }
    if let Err(response) = store_mode(&session, WizardMode::Create) {
        return response;
    }

    redirect(&step_url(WizardStep::BasicInfo))
}

#[get("/planner/edit/{trip_id}")]
pub async fn edit_trip(
    trip_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    session: Session,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let trip_id = trip_id.into_inner();
    let draft = match planner::load_draft(repo.as_ref(), trip_id, &user.email) {
        Ok(draft) => draft,
        Err(ServiceError::NotFound) | Err(ServiceError::Forbidden) => {
            FlashMessage::error("Perjalanan tidak ditemukan.").send();
            return redirect("/trips");
        }
        Err(e) => return server_error("Failed to load trip for editing", e),
    };

    if let Err(response) = store_draft(&session, &draft) {
        return response;
    }
    if let Err(response) = store_mode(&session, WizardMode::Edit(trip_id)) {
        return response;
    }

    redirect(&step_url(WizardStep::BasicInfo))
}

#[derive(Deserialize)]
struct StepQueryParams {
    q: Option<String>,
    category: Option<String>,
    day: Option<i32>,
    // Carried by suggestion links to pre-fill the add-activity form.
    destination_id: Option<i32>,
    label: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
}

#[get("/planner/step/{number}")]
pub async fn show_step(
    number: web::Path<usize>,
    params: web::Query<StepQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let Some(step) = WizardStep::from_number(number.into_inner()) else {
        return redirect(&step_url(WizardStep::BasicInfo));
    };

    let draft = load_draft(&session);
    let mode = load_mode(&session);

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "planner",
        &server_config.auth_service_url,
    );
    context.insert("draft", &draft);
    context.insert("step", &step.number());
    context.insert("step_title", step.title());
    context.insert("steps", &WizardStep::ALL.map(|s| (s.number(), s.title())));
    context.insert("editing", &matches!(mode, WizardMode::Edit(_)));
    context.insert("day_count", &draft.day_count());

    match step {
        WizardStep::BasicInfo => {
            context.insert("trip_types", &TripType::ALL.map(|t| (t.as_str(), t.label())));
        }
        WizardStep::Destinations => {
            let q = params.q.as_deref().unwrap_or("").trim();
            let category = params.category.as_deref().unwrap_or("").trim();
            let mut query = DestinationListQuery::new();
            if !q.is_empty() {
                query = query.search(q);
            }
            if !category.is_empty() {
                query = query.category(category);
            }
            let (_total, destinations) = match catalog::list_destinations(repo.as_ref(), query) {
                Ok(result) => result,
                Err(e) => return server_error("Failed to list destinations", e),
            };
            let categories = match catalog::destination_categories(repo.as_ref()) {
                Ok(categories) => categories,
                Err(e) => return server_error("Failed to list categories", e),
            };
            context.insert("destinations", &destinations);
            context.insert("categories", &categories);
            context.insert("search_query", q);
            context.insert("selected_category", category);
        }
        WizardStep::Schedule => {
            let day_count = draft.day_count().unwrap_or(0);
            let day = params.day.unwrap_or(1).clamp(1, day_count.max(1));
            context.insert("active_day", &day);
            context.insert("days", &(1..=day_count).collect::<Vec<i32>>());
            context.insert("entries", &draft.entries_for_day(day));

            // Suggested activities of the selected destinations; picking
            // one links back here with these params to pre-fill the form.
            let mut suggestions = Vec::new();
            for pick in &draft.selected_destinations {
                match repo.list_destination_activities(pick.destination_id) {
                    Ok(activities) => suggestions.extend(activities),
                    Err(e) => return server_error("Failed to list activities", e),
                }
            }
            context.insert("suggestions", &suggestions);
            context.insert("prefill_destination", &params.destination_id.unwrap_or(0));
            context.insert("prefill_label", params.label.as_deref().unwrap_or(""));
            context.insert("prefill_start", params.start_time.as_deref().unwrap_or(""));
            context.insert("prefill_end", params.end_time.as_deref().unwrap_or(""));
        }
        WizardStep::Budget => {
            context.insert("packing_list_text", &draft.packing_list.join("\n"));
        }
        WizardStep::Review => {
            context.insert("total_budget", &draft.total_budget());
            context.insert("per_person_budget", &draft.per_person_budget());
        }
    }

    render_template(&tera, step.template(), &context)
}

#[derive(Deserialize)]
pub struct AdvanceForm {
    pub from: usize,
}

/// Advances past a step, enforcing the step's completion guard.
#[post("/planner/next")]
pub async fn next_step(
    user: AuthenticatedUser,
    session: Session,
    web::Form(form): web::Form<AdvanceForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let Some(step) = WizardStep::from_number(form.from) else {
        return redirect(&step_url(WizardStep::BasicInfo));
    };

    let draft = load_draft(&session);
    let mode = load_mode(&session);

    if let Err(e) = can_advance(step, mode, &draft) {
        FlashMessage::error(e.to_string()).send();
        return redirect(&step_url(step));
    }

    match step.next() {
        Some(next) => redirect(&step_url(next)),
        None => redirect(&step_url(step)),
    }
}

#[post("/planner/basic")]
pub async fn save_basic_info(
    user: AuthenticatedUser,
    session: Session,
    web::Form(form): web::Form<BasicInfoForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate basic info form: {e}");
        FlashMessage::error("Periksa kembali info dasar perjalanan.").send();
        return redirect(&step_url(WizardStep::BasicInfo));
    }
    if form.end_date < form.start_date {
        FlashMessage::error("Tanggal selesai mendahului tanggal mulai.").send();
        return redirect(&step_url(WizardStep::BasicInfo));
    }

    let mut draft = load_draft(&session);
    draft.apply(DraftPatch::from(&form));

    // Shrinking the date range can strand schedule entries past the new
    // last day; drop them so the day invariant keeps holding.
    if let Some(day_count) = draft.day_count() {
        draft.schedule.retain(|e| e.day <= day_count);
    }

    if let Err(response) = store_draft(&session, &draft) {
        return response;
    }

    redirect(&step_url(WizardStep::Destinations))
}

#[post("/planner/destinations/toggle")]
pub async fn toggle_destination(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    session: Session,
    web::Form(form): web::Form<ToggleDestinationForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let mut draft = load_draft(&session);

    if draft.is_selected(form.destination_id) {
        draft.remove_destination(form.destination_id);
    } else {
        let destination = match repo.get_destination_by_id(form.destination_id) {
            Ok(Some(destination)) => destination,
            Ok(None) => {
                FlashMessage::error("Destinasi tidak ditemukan.").send();
                return redirect(&step_url(WizardStep::Destinations));
            }
            Err(e) => return server_error("Failed to load destination", e),
        };
        draft.toggle_destination((&destination).into());
    }

    if let Err(response) = store_draft(&session, &draft) {
        return response;
    }

    redirect(&step_url(WizardStep::Destinations))
}

#[post("/planner/destinations/reorder")]
pub async fn reorder_destinations(
    user: AuthenticatedUser,
    session: Session,
    web::Form(form): web::Form<ReorderDestinationsForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let mut draft = load_draft(&session);
    draft.move_destination(form.from, form.to);

    if let Err(response) = store_draft(&session, &draft) {
        return response;
    }

    redirect(&step_url(WizardStep::Destinations))
}

#[post("/planner/schedule/add")]
pub async fn add_schedule_entry(
    user: AuthenticatedUser,
    session: Session,
    web::Form(form): web::Form<AddActivityForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let back = format!("{}?day={}", step_url(WizardStep::Schedule), form.day);

    if let Err(e) = form.validate() {
        log::error!("Failed to validate activity form: {e}");
        FlashMessage::error("Periksa kembali aktivitas yang diisi.").send();
        return redirect(&back);
    }

    let mut draft = load_draft(&session);
    if let Err(e) = draft.add_schedule_entry(DraftScheduleEntry::from(&form)) {
        FlashMessage::error(e.to_string()).send();
        return redirect(&back);
    }

    if let Err(response) = store_draft(&session, &draft) {
        return response;
    }

    redirect(&back)
}

#[post("/planner/schedule/remove")]
pub async fn remove_schedule_entry(
    user: AuthenticatedUser,
    session: Session,
    web::Form(form): web::Form<RemoveActivityForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let mut draft = load_draft(&session);
    draft.remove_schedule_entry(form.index);

    if let Err(response) = store_draft(&session, &draft) {
        return response;
    }

    redirect(&format!("{}?day={}", step_url(WizardStep::Schedule), form.day))
}

#[post("/planner/budget")]
pub async fn save_budget(
    user: AuthenticatedUser,
    session: Session,
    web::Form(form): web::Form<BudgetNotesForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate budget form: {e}");
        FlashMessage::error("Anggaran tidak boleh negatif.").send();
        return redirect(&step_url(WizardStep::Budget));
    }

    let mut draft = load_draft(&session);
    draft.apply(DraftPatch::from(&form));

    if let Err(response) = store_draft(&session, &draft) {
        return response;
    }

    redirect(&step_url(WizardStep::Review))
}

#[post("/planner/submit")]
pub async fn submit_trip(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    session: Session,
    web::Form(form): web::Form<SubmitTripForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ACCESS_ROLE, Some("/na")) {
        return response;
    }

    let mut draft = load_draft(&session);
    draft.apply(DraftPatch {
        is_public: Some(form.is_public()),
        ..Default::default()
    });

    let mode = load_mode(&session);
    let result = match mode {
        WizardMode::Create => planner::submit_draft(repo.as_ref(), &user.email, &draft),
        WizardMode::Edit(trip_id) => {
            planner::resubmit_draft(repo.as_ref(), trip_id, &user.email, &draft)
        }
    };

    match result {
        Ok(trip) => {
            clear_draft(&session);
            FlashMessage::success("Perjalanan tersimpan.").send();
            redirect(&format!("/trips/{}", trip.id))
        }
        Err(ServiceError::Draft(e)) => {
            FlashMessage::error(e.to_string()).send();
            redirect(&step_url(WizardStep::Review))
        }
        Err(ServiceError::NotFound) | Err(ServiceError::Forbidden) => {
            FlashMessage::error("Perjalanan tidak ditemukan.").send();
            redirect("/trips")
        }
        Err(e) => server_error("Failed to submit trip", e),
    }
}
