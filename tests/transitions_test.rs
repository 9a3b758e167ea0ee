//! Filter-state transitions driven through the browser
mod common;

use std::sync::Arc;

use common::{RecordBuilder, reference_now};
use interview_catalog::browser::{Action, Browser};
use interview_catalog::catalog::{Catalog, Taxonomy};
use interview_catalog::error::{BrowserError, SelectionError};
use interview_catalog::filters::{FilterAction, FilterField, FilterSpec, TimeRange};
use interview_catalog::models::{Difficulty, JobType};

fn browser() -> Browser {
    let records = [
        RecordBuilder::new("1").category("开发", "前端").company("A"),
        RecordBuilder::new("2").category("开发", "后端").company("B").job_type("social"),
        RecordBuilder::new("3").category("设计", "UI").company("C").difficulty(8),
    ]
    .iter()
    .map(RecordBuilder::build)
    .collect();
    Browser::new(Arc::new(Catalog::with_taxonomy(records, &Taxonomy::builtin()).unwrap()))
}

fn filter(browser: &mut Browser, action: FilterAction) {
    browser.dispatch(Action::Filter(action)).unwrap();
}

#[test]
fn test_toggle_twice_restores_state() {
    let actions = [
        FilterAction::SelectJobType(JobType::Social),
        FilterAction::SelectCategory("设计".to_string()),
        FilterAction::SelectSubcategory("UI".to_string()),
        FilterAction::SelectTimeRange(TimeRange::TwoWeeks),
        FilterAction::SelectDifficulty(Difficulty::new(8).unwrap()),
        FilterAction::ToggleCompany("C".to_string()),
    ];

    for action in actions {
        let mut browser = browser();
        filter(&mut browser, FilterAction::AddCompany("A".to_string()));
        let before = browser.spec().clone();
        let before_count = browser.result_count(reference_now());

        filter(&mut browser, action.clone());
        filter(&mut browser, action.clone());
        assert_eq!(browser.spec(), &before, "{:?}", action);
        assert_eq!(browser.result_count(reference_now()), before_count);
    }
}

#[test]
fn test_category_cascade_scenario() {
    let mut browser = browser();
    filter(&mut browser, FilterAction::SelectCategory("开发".to_string()));
    filter(&mut browser, FilterAction::SelectSubcategory("前端".to_string()));
    assert_eq!(browser.result_count(reference_now()), 1);

    filter(&mut browser, FilterAction::SelectCategory("设计".to_string()));
    assert_eq!(browser.spec().category.as_deref(), Some("设计"));
    assert_eq!(browser.spec().subcategory, None);
    assert_eq!(browser.result_count(reference_now()), 1);
    assert!(Taxonomy::builtin().validate_selection(browser.spec()).is_ok());
}

#[test]
fn test_lone_subcategory_filters_literally_but_fails_validation() {
    let mut browser = browser();
    filter(&mut browser, FilterAction::SelectSubcategory("后端".to_string()));
    assert_eq!(browser.result_count(reference_now()), 1);
    assert_eq!(
        Taxonomy::builtin().validate_selection(browser.spec()),
        Err(SelectionError::SubcategoryWithoutCategory("后端".to_string()))
    );
}

#[test]
fn test_clear_all_restores_full_list() {
    let mut browser = browser();
    filter(&mut browser, FilterAction::SelectJobType(JobType::Campus));
    filter(&mut browser, FilterAction::SelectCategory("设计".to_string()));
    filter(&mut browser, FilterAction::SetSearch("nothing matches this".to_string()));
    assert_eq!(browser.result_count(reference_now()), 0);

    filter(&mut browser, FilterAction::ClearAll);
    assert_eq!(browser.spec(), &FilterSpec::default());
    assert_eq!(browser.result_count(reference_now()), 3);
}

#[test]
fn test_chip_removal() {
    let mut browser = browser();
    filter(&mut browser, FilterAction::AddCompany("A".to_string()));
    filter(&mut browser, FilterAction::AddCompany("B".to_string()));
    filter(&mut browser, FilterAction::SelectJobType(JobType::Social));
    assert_eq!(browser.result_count(reference_now()), 1);

    filter(&mut browser, FilterAction::Remove(FilterField::JobType));
    assert_eq!(browser.result_count(reference_now()), 2);

    filter(&mut browser, FilterAction::Remove(FilterField::Companies));
    assert!(!browser.spec().has_active_filters());
}

#[test]
fn test_analysis_for_unknown_record() {
    let mut browser = browser();
    assert_eq!(
        browser.dispatch(Action::OpenAnalysis("missing".to_string())),
        Err(BrowserError::UnknownRecord("missing".to_string()))
    );
    assert!(!browser.is_analysis_open());
}
