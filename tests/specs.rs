// tests/specs.rs
use std::collections::HashSet;

use pretty_assertions::assert_eq;

use statsguru_scrape::config::BASE_URL;
use statsguru_scrape::specs::{enumerate_specs, make_url, Category, QuerySpec};

#[test]
fn enumeration_is_deterministic() {
    assert_eq!(enumerate_specs(), enumerate_specs());
}

#[test]
fn enumeration_has_no_duplicates() {
    let specs = enumerate_specs();
    let mut seen = HashSet::new();
    for spec in &specs {
        let mut extra = spec.extra.clone();
        extra.sort();
        assert!(
            seen.insert((spec.category, spec.view.clone(), spec.class, extra)),
            "duplicate spec: {spec:?}"
        );
    }
}

#[test]
fn enumeration_sweeps_every_class_for_every_view() {
    let specs = enumerate_specs();
    // 6 classes x (3 categories x 2 core views + dismissal summary
    // + 3 categories x 3 extra views)
    assert_eq!(specs.len(), 96);

    for class in 1u8..=6 {
        assert!(specs.iter().any(|s| {
            s.category == Category::Fielding
                && s.view.as_deref() == Some("dismissal_summary")
                && s.class == Some(class)
        }));
        assert!(specs.iter().any(|s| {
            s.category == Category::Fielding
                && s.view.as_deref() == Some("innings")
                && s.class == Some(class)
        }));
    }
}

#[test]
fn url_puts_class_first_when_present() {
    let spec = QuerySpec::new(Category::Fielding, "dismissal_summary", 3);
    let url = make_url(BASE_URL, 625371, &spec);
    assert_eq!(
        url,
        "https://stats.espncricinfo.com/ci/engine/player/625371.html\
         ?class=3;template=results;type=fielding;view=dismissal_summary"
    );
}

#[test]
fn url_starts_with_template_when_class_absent() {
    let spec = QuerySpec {
        category: Category::Batting,
        view: None,
        class: None,
        extra: Vec::new(),
    };
    let url = make_url(BASE_URL, 42, &spec);
    assert_eq!(
        url,
        "https://stats.espncricinfo.com/ci/engine/player/42.html?template=results;type=batting"
    );
}

#[test]
fn url_params_are_semicolon_joined() {
    for spec in enumerate_specs() {
        let url = make_url(BASE_URL, 625371, &spec);
        let query = url.split_once('?').unwrap().1;
        assert!(!query.contains('&'), "ampersand in {url}");
        assert!(query.contains(';'));
    }
}

#[test]
fn url_keeps_extra_params_in_insertion_order() {
    let spec = QuerySpec {
        category: Category::Bowling,
        view: Some("innings".into()),
        class: Some(2),
        extra: vec![
            ("orderby".into(), "wickets".into()),
            ("opposition".into(), "1".into()),
        ],
    };
    let url = make_url(BASE_URL, 7, &spec);
    assert!(url.ends_with(
        "?class=2;template=results;type=bowling;view=innings;orderby=wickets;opposition=1"
    ));
}

#[test]
fn page_key_spells_out_absent_fields() {
    let spec = QuerySpec {
        category: Category::Batting,
        view: None,
        class: None,
        extra: Vec::new(),
    };
    assert_eq!(spec.page_key(), "type=batting__view=none__class=none");

    let spec = QuerySpec::new(Category::Fielding, "dismissal_summary", 3);
    assert_eq!(
        spec.page_key(),
        "type=fielding__view=dismissal_summary__class=3"
    );
}
