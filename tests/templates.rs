use tera::{Context, Tera};

use sangihe_trip::domain::destination::DestinationActivity;
use sangihe_trip::domain::draft::{DestinationPick, DraftScheduleEntry, TripDraft};
use sangihe_trip::domain::wizard::WizardStep;

fn schedule_context() -> Context {
    let mut draft = TripDraft::default();
    draft.selected_destinations.push(DestinationPick {
        destination_id: 4,
        name: "Pantai Mahoro".to_string(),
        category: "pantai".to_string(),
        image_url: None,
        rating: 4.5,
        price: None,
    });

    let mut context = Context::new();
    context.insert("alerts", &Vec::<(String, String)>::new());
    context.insert("current_page", "planner");
    context.insert("home_url", "https://auth.localhost");
    context.insert("draft", &draft);
    context.insert("step", &3usize);
    context.insert("step_title", WizardStep::Schedule.title());
    context.insert("steps", &WizardStep::ALL.map(|s| (s.number(), s.title())));
    context.insert("editing", &false);
    context.insert("day_count", &3);
    context.insert("days", &[1, 2, 3]);
    context.insert("active_day", &1);
    context.insert("entries", &Vec::<DraftScheduleEntry>::new());
    context.insert(
        "suggestions",
        &[DestinationActivity {
            id: 1,
            destination_id: 4,
            label: "Snorkeling".to_string(),
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
        }],
    );
    context
}

#[test]
fn schedule_step_prefills_suggested_activity() {
    let tera = Tera::new("templates/**/*.html").unwrap();

    let mut context = schedule_context();
    context.insert("prefill_destination", &4);
    context.insert("prefill_label", "Snorkeling");
    context.insert("prefill_start", "09:00");
    context.insert("prefill_end", "11:00");

    let html = tera.render("planner/schedule.html", &context).unwrap();

    assert!(html.contains(r#"name="start_time" value="09:00""#));
    assert!(html.contains(r#"name="end_time" value="11:00""#));
    assert!(html.contains(r#"name="label" value="Snorkeling""#));
    assert!(html.contains(r#"value="4" selected"#));
}

#[test]
fn suggestion_links_carry_prefill_params() {
    let tera = Tera::new("templates/**/*.html").unwrap();

    let mut context = schedule_context();
    context.insert("prefill_destination", &0);
    context.insert("prefill_label", "");
    context.insert("prefill_start", "");
    context.insert("prefill_end", "");

    let html = tera.render("planner/schedule.html", &context).unwrap();

    assert!(html.contains("destination_id=4"));
    assert!(html.contains("start_time=09%3A00"));
    assert!(html.contains("end_time=11%3A00"));
}
