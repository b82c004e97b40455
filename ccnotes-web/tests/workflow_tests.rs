//! Form workflow tests against an in-memory database

use ccnotes_common::db::{init_memory_database, Note, Series, SeriesFields};
use ccnotes_web::entity::{NoteInput, SeriesInput};
use ccnotes_web::form::{Control, FormMode, FormState, FormView, SubmitOutcome};
use ccnotes_web::AppState;
use chrono::NaiveDate;

async fn setup() -> AppState {
    AppState::new(init_memory_database().await.unwrap())
}

fn note_input(title: &str, body: &str) -> NoteInput {
    NoteInput {
        title: title.to_string(),
        body: body.to_string(),
        ..Default::default()
    }
}

fn expect_invalid(outcome: SubmitOutcome) -> FormView {
    match outcome {
        SubmitOutcome::Invalid(view) => view,
        other => panic!("expected invalid form, got {:?}", other),
    }
}

fn expect_saved(outcome: SubmitOutcome) -> i64 {
    match outcome {
        SubmitOutcome::Saved { id, redirect } => {
            assert!(redirect.starts_with('/'));
            id
        }
        other => panic!("expected saved, got {:?}", other),
    }
}

#[tokio::test]
async fn test_valid_submit_round_trips_trimmed_values() {
    let state = setup().await;
    let series = state
        .series
        .create(&SeriesFields { title: "Romans".into() })
        .await
        .unwrap();

    let outcome = state
        .form::<Note>()
        .submit(
            FormMode::New,
            NoteInput {
                title: "  Grace ".into(),
                body: "<p>Body</p>".into(),
                date: "2019-11-24".into(),
                series_id: series.to_string(),
                speaker_id: String::new(),
            },
        )
        .await
        .unwrap();
    let id = expect_saved(outcome);

    let note = state.notes.get(id).await.unwrap();
    assert_eq!(note.title, "Grace");
    assert_eq!(note.body, "<p>Body</p>");
    assert_eq!(note.date, NaiveDate::from_ymd_opt(2019, 11, 24));
    assert_eq!(note.series_id, Some(series));
    assert_eq!(note.speaker_id, None);
}

#[tokio::test]
async fn test_whitespace_title_rejected_and_nothing_written() {
    let state = setup().await;

    let view = expect_invalid(
        state
            .form::<Note>()
            .submit(FormMode::New, note_input("   ", "x"))
            .await
            .unwrap(),
    );

    assert_eq!(view.state, FormState::Invalid);
    assert!(view.errors.get("title").is_some());
    assert_eq!(state.notes.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_invalid_edit_shows_submitted_not_stored_values() {
    let state = setup().await;
    let form = state.form::<Note>();
    let id = expect_saved(
        form.submit(FormMode::New, note_input("Stored title", "Stored body"))
            .await
            .unwrap(),
    );

    let view = expect_invalid(
        form.submit(
            FormMode::Edit(id),
            NoteInput {
                title: " ".into(),
                body: "Edited body".into(),
                date: "05/03/2017".into(),
                series_id: String::new(),
                speaker_id: String::new(),
            },
        )
        .await
        .unwrap(),
    );

    assert_eq!(view.mode, FormMode::Edit(id));
    assert_eq!(view.field("title").unwrap().value, " ");
    assert_eq!(view.field("body").unwrap().value, "Edited body");
    assert_eq!(view.field("date").unwrap().value, "05/03/2017");
    assert!(view.field("date").unwrap().error.is_some());

    let stored = state.notes.get(id).await.unwrap();
    assert_eq!(stored.title, "Stored title");
}

#[tokio::test]
async fn test_unknown_series_is_field_error() {
    let state = setup().await;

    let view = expect_invalid(
        state
            .form::<Note>()
            .submit(
                FormMode::New,
                NoteInput {
                    series_id: "77".into(),
                    ..note_input("T", "B")
                },
            )
            .await
            .unwrap(),
    );

    assert_eq!(
        view.errors.get("series_id"),
        Some("The selected series does not exist.")
    );
    assert_eq!(state.notes.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_edit_form_prefilled_with_selection() {
    let state = setup().await;
    let a = state.series.create(&SeriesFields { title: "A".into() }).await.unwrap();
    let b = state.series.create(&SeriesFields { title: "B".into() }).await.unwrap();
    let form = state.form::<Note>();
    let id = expect_saved(
        form.submit(
            FormMode::New,
            NoteInput {
                series_id: b.to_string(),
                ..note_input("T", "B")
            },
        )
        .await
        .unwrap(),
    );

    let view = form.render_edit(id).await.unwrap();
    assert_eq!(view.state, FormState::Prefilled);
    assert_eq!(view.action, format!("/Note/edit/{}", id));

    match &view.field("series_id").unwrap().control {
        Control::Select { options, .. } => {
            let selected: Vec<i64> = options.iter().filter(|o| o.selected).map(|o| o.id).collect();
            assert_eq!(options.len(), 2);
            assert_eq!(options[0].id, a);
            assert_eq!(selected, vec![b]);
        }
        other => panic!("expected select control, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_submit_keeps_submitted_selection() {
    let state = setup().await;
    let a = state.series.create(&SeriesFields { title: "A".into() }).await.unwrap();
    let b = state.series.create(&SeriesFields { title: "B".into() }).await.unwrap();

    let view = expect_invalid(
        state
            .form::<Note>()
            .submit(
                FormMode::New,
                NoteInput {
                    series_id: b.to_string(),
                    ..note_input("", "B")
                },
            )
            .await
            .unwrap(),
    );

    assert!(view.errors.get("title").is_some());
    assert_eq!(view.field("series_id").unwrap().value, b.to_string());
    match &view.field("series_id").unwrap().control {
        Control::Select { options, .. } => {
            let selected: Vec<i64> = options.iter().filter(|o| o.selected).map(|o| o.id).collect();
            assert_eq!(options.iter().map(|o| o.id).collect::<Vec<_>>(), vec![a, b]);
            assert_eq!(selected, vec![b]);
        }
        other => panic!("expected select control, got {:?}", other),
    }
    assert_eq!(state.notes.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_new_form_is_empty_with_date_placeholder() {
    let state = setup().await;
    let view = state.form::<Note>().render_new().await.unwrap();

    assert_eq!(view.state, FormState::Empty);
    assert_eq!(view.action, "/Note/add");
    assert!(view.fields.iter().all(|f| f.value.is_empty()));
    assert!(matches!(
        &view.field("date").unwrap().control,
        Control::Date { placeholder } if placeholder.len() == 10
    ));
}

#[tokio::test]
async fn test_edit_of_missing_record_is_not_found() {
    let state = setup().await;
    let err = state
        .form::<Series>()
        .submit(FormMode::Edit(5), SeriesInput { title: "X".into() })
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    assert!(state.form::<Series>().render_edit(5).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_listing_reproducible_across_calls() {
    let state = setup().await;
    let form = state.form::<Note>();
    for title in ["One", "Two", "Three"] {
        expect_saved(form.submit(FormMode::New, note_input(title, "b")).await.unwrap());
    }

    let listing = state.listing::<Note>();
    let first = listing.render_index().await.unwrap();
    let second = listing.render_index().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.rows[0].cells[1], "Three");
}
