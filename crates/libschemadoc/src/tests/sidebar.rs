use crate::index::Category;
use crate::render::DocumentAssembler;
use crate::render::NavigationSidebar;
use crate::render::SectionSpan;
use crate::render::active_anchor;
use crate::tests::test_helpers;
use crate::tests::test_helpers::collect_anchor_ids;

fn sample_sidebar() -> NavigationSidebar {
    let queries = test_helpers::query_map(vec![
        test_helpers::mk_query("events", vec![], "[Event]"),
        test_helpers::mk_query("userSearch", vec![], "[User!]!"),
    ]);
    let types = test_helpers::type_map(vec![
        test_helpers::mk_enum("Color", &["RED"]),
        test_helpers::mk_object("Event", vec![]),
        test_helpers::mk_object("User", vec![]),
    ]);
    NavigationSidebar::new(&queries, &types)
}

#[test]
fn one_section_per_group_in_fixed_order() {
    let sidebar = sample_sidebar();
    let labels: Vec<&str> = sidebar.sections()
        .iter()
        .map(|section| section.label())
        .collect();
    assert_eq!(
        labels,
        ["Queries", "Types", "Inputs", "Enums", "Scalars", "Interfaces", "Unions"],
    );
}

#[test]
fn sections_start_collapsed_and_toggle_independently() {
    let mut sidebar = sample_sidebar();
    assert!(sidebar.sections().iter().all(|section| section.is_collapsed()));

    sidebar.sections_mut()[0].toggle();
    assert!(!sidebar.sections()[0].is_collapsed());
    assert!(sidebar.sections()[1].is_collapsed());

    // Repeated toggles alternate state.
    sidebar.sections_mut()[0].toggle();
    assert!(sidebar.sections()[0].is_collapsed());
    sidebar.sections_mut()[0].toggle();
    assert!(!sidebar.sections()[0].is_collapsed());
}

#[test]
fn toggling_never_touches_entries() {
    let mut sidebar = sample_sidebar();
    let before: Vec<Vec<String>> = sidebar.sections()
        .iter()
        .map(|section| section.entries().to_vec())
        .collect();

    for section in sidebar.sections_mut() {
        section.toggle();
        section.toggle();
    }

    let after: Vec<Vec<String>> = sidebar.sections()
        .iter()
        .map(|section| section.entries().to_vec())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn entries_are_name_sorted_per_group() {
    let sidebar = sample_sidebar();
    assert_eq!(sidebar.sections()[0].entries(), ["events", "userSearch"]);
    assert_eq!(sidebar.sections()[0].category(), Category::Query);
    assert_eq!(sidebar.sections()[1].entries(), ["Event", "User"]);
    assert_eq!(sidebar.sections()[3].entries(), ["Color"]);
    assert!(sidebar.sections()[2].entries().is_empty());
}

#[test]
fn every_sidebar_link_targets_a_content_anchor() {
    let queries = test_helpers::query_map(vec![
        test_helpers::mk_query("events", vec![], "[Event]"),
    ]);
    let types = test_helpers::type_map(vec![
        test_helpers::mk_enum("Color", &["RED"]),
        test_helpers::mk_object("Event", vec![]),
        test_helpers::mk_scalar("DateTime"),
        test_helpers::mk_union("SearchResult", &["Event"]),
    ]);

    let sidebar_html = NavigationSidebar::new(&queries, &types).to_html();
    let content_html = DocumentAssembler::new(&queries, &types).assemble();
    let content_ids = collect_anchor_ids(&content_html);

    for chunk in sidebar_html.split("href='#").skip(1) {
        let target = &chunk[..chunk.find('\'').unwrap()];
        assert!(
            content_ids.iter().any(|id| id == target),
            "sidebar link targets missing anchor: {target}",
        );
    }
}

fn sample_spans() -> Vec<SectionSpan> {
    vec![
        SectionSpan {
            anchor: "query-events".to_string(),
            height: 200.0,
            top: 0.0,
        },
        SectionSpan {
            anchor: "type-Event".to_string(),
            height: 300.0,
            top: 200.0,
        },
        SectionSpan {
            anchor: "type-User".to_string(),
            height: 150.0,
            top: 500.0,
        },
    ]
}

#[test]
fn reference_point_inside_one_span_activates_exactly_that_link() {
    let spans = sample_spans();
    assert_eq!(active_anchor(&spans, 250.0), Some("type-Event"));
    assert_eq!(active_anchor(&spans, 0.0), Some("query-events"));
}

#[test]
fn at_most_one_link_is_active() {
    // Overlapping spans: the first match wins.
    let spans = vec![
        SectionSpan { anchor: "a".to_string(), height: 100.0, top: 0.0 },
        SectionSpan { anchor: "b".to_string(), height: 100.0, top: 50.0 },
    ];
    assert_eq!(active_anchor(&spans, 60.0), Some("a"));
}

#[test]
fn reference_point_outside_every_span_activates_nothing() {
    let spans = sample_spans();
    assert_eq!(active_anchor(&spans, 10_000.0), None);
    assert_eq!(active_anchor(&[], 0.0), None);
}

#[test]
fn recomputation_on_unchanged_position_is_idempotent() {
    let spans = sample_spans();
    let first = active_anchor(&spans, 321.5);
    let second = active_anchor(&spans, 321.5);
    assert_eq!(first, second);
}

#[test]
fn span_boundaries_are_half_open() {
    let spans = sample_spans();
    // The reference point sits SCROLL_REFERENCE_OFFSET below the scroll
    // position; 190.0 puts it exactly at the second span's top.
    assert_eq!(active_anchor(&spans, 190.0), Some("type-Event"));
    // ...and exactly at the last span's bottom edge, which is exclusive.
    assert_eq!(active_anchor(&spans, 640.0), None);
}
