mod common;

use common::Harness;
use the_search_field::{
  Candidate,
  EditCommand,
  Key,
};

#[test]
fn suggest_appends_and_selects_suffix() {
  let mut h = Harness::new();
  h.field.set_text("Pro");

  assert!(h.field.suggest("Project Plan"));

  assert_eq!(h.field.text(), "Project Plan");
  assert_eq!(h.field.selection().as_range(), 3..12);
}

#[test]
fn suggest_ignores_non_matching_title() {
  let mut h = Harness::new();
  h.field.set_text("Pro");
  let before = h.field.state().clone();

  assert!(!h.field.suggest("Notes"));
  assert_eq!(h.field.state(), &before);
}

#[test]
fn suggest_ignores_fully_typed_title() {
  let mut h = Harness::new();
  h.field.set_text("Project Plan");
  let before = h.field.state().clone();

  assert!(!h.field.suggest("Project Plan"));
  assert_eq!(h.field.state(), &before);
}

#[test]
fn suggest_matches_title_with_different_case() {
  let mut h = Harness::new();
  h.field.set_text("PROJECT PLAN");
  assert!(h.field.suggest("project plan"));
  assert_eq!(h.field.text(), "PROJECT PLAN");
  assert!(h.field.selection().is_empty());
}

#[test]
fn suggest_mutates_iff_title_extends_text() {
  let titles = ["Project Plan", "project", "Pro", "Notes", "Pr", "", "PROBLEMS"];
  let typed = ["", "p", "Pro", "pro", "Project Plan", "x"];
  for prefix in typed {
    for title in titles {
      let mut h = Harness::new();
      h.field.set_text(prefix);
      let extends = title != prefix && title.to_lowercase().starts_with(&prefix.to_lowercase());

      let changed = h.field.suggest(title);

      assert_eq!(changed, extends, "{prefix:?} -> {title:?}");
      if !changed {
        assert_eq!(h.field.text(), prefix);
      }
    }
  }
}

#[test]
fn typing_over_suggested_suffix_replaces_it() {
  let mut h = Harness::new();
  h.type_text("Pro");
  h.field.suggest("Project Plan");
  h.type_text("b");
  assert_eq!(h.field.text(), "Prob");
}

#[test]
fn offered_suggestion_waits_out_backward_delete() {
  let mut h = Harness::new();
  h.type_text("Proj");
  let now = h.now();
  h.field
    .do_command(&mut h.nav, EditCommand::DeleteBackward, now);
  let candidate = Candidate::new("Project Plan");

  assert!(!h.field.offer_suggestion(&candidate));
  assert_eq!(h.field.text(), "Pro");

  h.field.key_up(&mut h.nav, Key::Backspace.into());
  assert!(h.field.offer_suggestion(&candidate));
  assert_eq!(h.field.text(), "Project Plan");
}

#[test]
fn typing_over_a_backwards_selection() {
  let mut h = Harness::new();
  h.field.set_text("abcd");
  h.field.set_selection((3, 1)).unwrap();
  assert_eq!(h.field.selection().as_range(), 1..3);

  h.type_text("x");
  assert_eq!(h.field.text(), "axd");
  assert!(h.field.pipeline().has_pending_query());
}
