// Integration tests for userdir

use userdir::directory::{Address, Company, Geo, UserRecord};

fn mk_user(id: u64, name: &str, username: &str, email: &str, company: &str, lat: &str, lng: &str) -> UserRecord {
    UserRecord {
        id,
        name: name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        phone: format!("555-0{id:03}"),
        website: format!("{}.example.com", username.to_lowercase()),
        address: Address {
            street: "Main St".to_string(),
            suite: format!("Apt. {id}"),
            city: "Springfield".to_string(),
            zipcode: "00000".to_string(),
            geo: Geo {
                lat: lat.to_string(),
                lng: lng.to_string(),
            },
        },
        company: Company {
            name: company.to_string(),
            catch_phrase: "synergize scalable paradigms".to_string(),
            bs: "e-enable".to_string(),
        },
    }
}

// 1) Theme config roundtrip and init
#[test]
fn theme_roundtrip_and_init() {
    use std::{
        fs,
        path::PathBuf,
        time::{SystemTime, UNIX_EPOCH},
    };
    use userdir::app::Theme;

    // Unique temp path
    let mut path = std::env::temp_dir();
    let nonce = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    path.push(format!("userdir_theme_{}_{}.conf", std::process::id(), nonce));
    let path_str = path.to_string_lossy().to_string();

    // Roundtrip write/read
    let t = Theme::mocha();
    t.write_file(&path_str).expect("write theme");
    let t2 = Theme::from_file(&path_str).expect("read theme");
    assert_eq!(format!("{:?}", t.text), format!("{:?}", t2.text));
    assert_eq!(format!("{:?}", t.title), format!("{:?}", t2.title));
    assert_eq!(format!("{:?}", t.header_bg), format!("{:?}", t2.header_bg));

    // load_or_init creates file if missing
    let mut p2 = PathBuf::from(&path_str);
    p2.set_file_name(format!(
        "{}_init.conf",
        p2.file_stem().unwrap().to_string_lossy()
    ));
    let p2_str = p2.to_string_lossy().to_string();
    let _ = fs::remove_file(&p2_str);
    let _created = Theme::load_or_init(&p2_str);
    assert!(PathBuf::from(&p2_str).exists());

    // Cleanup best-effort
    let _ = fs::remove_file(&path_str);
    let _ = fs::remove_file(&p2_str);
}

// 2) The full list-view pipeline: debounced query -> filter -> paginate -> window
#[test]
fn search_filter_paginate_flow() {
    use std::time::{Duration, Instant};
    use userdir::app::{AppState, Theme};
    use userdir::directory::StaticDirectory;
    use userdir::pagination::{PAGE_WINDOW, page_window};

    // 47 records paginate into 10 pages of 5.
    let users: Vec<UserRecord> = (1..=47)
        .map(|i| {
            let company = if i % 3 == 0 { "Romaguera" } else { "Deckow" };
            mk_user(
                i,
                &format!("Person {i:02}"),
                &format!("person{i:02}"),
                &format!("person{i:02}@mail.test"),
                company,
                "0",
                "0",
            )
        })
        .collect();
    let source = StaticDirectory::new(users);
    let mut app = AppState::new(&source, Theme::mocha());
    assert_eq!(app.users.len(), 47);

    let view = app.visible_page();
    assert_eq!(view.total_pages, 10);
    assert_eq!(view.items.len(), 5);
    assert_eq!(
        page_window(view.current_page, view.total_pages, PAGE_WINDOW),
        vec![1, 2, 3, 4, 5]
    );

    // Walk to the middle and the far edge of the page range.
    app.go_to_page(5);
    let view = app.visible_page();
    assert_eq!(
        page_window(view.current_page, view.total_pages, PAGE_WINDOW),
        vec![3, 4, 5, 6, 7]
    );
    app.go_to_page(10);
    let view = app.visible_page();
    assert_eq!(view.items.len(), 2); // 47 = 9*5 + 2
    assert_eq!(
        page_window(view.current_page, view.total_pages, PAGE_WINDOW),
        vec![6, 7, 8, 9, 10]
    );

    // Type a query; it only takes effect after the quiet period.
    let start = Instant::now();
    app.search_input = "romaguera".to_string();
    app.queue_search(start);
    app.tick(start + Duration::from_millis(100));
    assert_eq!(app.users.len(), 47);
    assert_eq!(app.visible_page().current_page, 10);

    app.tick(start + Duration::from_millis(400));
    assert_eq!(app.users.len(), 15); // every third record
    let view = app.visible_page();
    assert_eq!(view.current_page, 1); // reset on query change
    assert_eq!(view.total_pages, 3);

    // Order was preserved by the filter.
    let ids: Vec<u64> = app.users.iter().map(|u| u.id).collect();
    let expected: Vec<u64> = (1..=47).filter(|i| i % 3 == 0).collect();
    assert_eq!(ids, expected);

    // Clearing restores the full collection immediately.
    app.clear_search();
    assert_eq!(app.users.len(), 47);
    assert_eq!(app.visible_page().current_page, 1);
}

// 3) Detail view consumes the mapper the same way the widget does
#[test]
fn detail_coordinates_round_to_stable_positions() {
    use userdir::geo::{GeoPoint, MARKER_RADIUS};

    let user = mk_user(1, "Polar Pete", "pete", "pete@mail.test", "North Co", "90", "0");
    let point = GeoPoint::parse(&user.address.geo.lat, &user.address.geo.lng).unwrap();
    assert_eq!(point.overlay_offset(), (0.0, -100.0));
    let [x, y, z] = point.sphere_position(MARKER_RADIUS);
    assert_eq!((x, y, z), (0.0, MARKER_RADIUS, 0.0));

    let bad = mk_user(2, "Lost Larry", "larry", "larry@mail.test", "Nowhere", "not-a-number", "0");
    assert!(GeoPoint::parse(&bad.address.geo.lat, &bad.address.geo.lng).is_err());
}

// 4) A dead source degrades to an empty, recoverable list view
#[test]
fn outage_then_recovery() {
    use userdir::app::{AppState, Theme};
    use userdir::directory::{DirectorySource, StaticDirectory};
    use userdir::error::DirectoryError;

    struct Flaky {
        healthy: StaticDirectory,
        fail: std::cell::Cell<bool>,
    }

    impl DirectorySource for Flaky {
        fn fetch_all(&self) -> Result<Vec<UserRecord>, DirectoryError> {
            if self.fail.replace(false) {
                Err(DirectoryError::Unavailable("503 service unavailable".into()))
            } else {
                self.healthy.fetch_all()
            }
        }

        fn fetch_by_id(&self, id: u64) -> Result<UserRecord, DirectoryError> {
            self.healthy.fetch_by_id(id)
        }
    }

    let source = Flaky {
        healthy: StaticDirectory::new(vec![mk_user(
            1, "Ada", "ada", "ada@mail.test", "Analytical", "0", "0",
        )]),
        fail: std::cell::Cell::new(true),
    };

    let mut app = AppState::new(&source, Theme::mocha());
    assert!(app.users.is_empty());
    assert!(app.load_error.as_deref().unwrap().contains("503"));

    // The retry key re-fetches through the same source.
    app.reload(&source);
    assert_eq!(app.users.len(), 1);
    assert!(app.load_error.is_none());
}
