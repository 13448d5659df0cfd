use huda::prelude::*;
use huda::qibla::{FixedLocation, ManualStepHeading, RIYADH_FALLBACK, SensorHeading};
use huda::store::JsonFileStore;

fn fixture_corpus() -> QuranCorpus {
    QuranCorpus::from_json_str(
        r#"[
            {"id": 1, "name": "الفاتحة", "type": "مكية",
             "array": [
                {"ar": "بسم الله الرحمن الرحيم"},
                {"ar": "الحمد لله رب العالمين"},
                {"ar": "الرحمن الرحيم"},
                {"ar": "مالك يوم الدين"},
                {"ar": "إياك نعبد وإياك نستعين"},
                {"ar": "اهدنا الصراط المستقيم"},
                {"ar": "صراط الذين أنعمت عليهم غير المغضوب عليهم ولا الضالين"}
             ]},
            {"id": 2, "name": "البقرة", "type": "مدنية", "array": [{"ar": "الم"}]},
            {"id": 3, "name": "آل عمران", "type": "مدنية", "array": [{"ar": "الم"}]}
        ]"#,
    )
    .expect("fixture corpus parses")
}

#[test]
fn test_resume_reading_flow() {
    // Home view focus: nothing saved yet, reader opens at the start.
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let corpus = fixture_corpus();

    let position = load_or_default(&store);
    assert_eq!(position, ReadingPosition::default());

    // The user reads Al-Fatiha and bookmarks verse 5.
    let chapter = corpus.chapter_at(position.surah).unwrap();
    assert_eq!(chapter.name, "الفاتحة");
    save_logged(&store, ReadingPosition::new(0, 5));

    // Next focus event re-reads the store.
    let resumed = load_or_default(&store);
    assert_eq!(resumed, ReadingPosition::new(0, 5));

    let chapter = corpus.chapter_at(resumed.surah).unwrap();
    let window = VerseWindow::new(resumed.verse);
    let rendered = window.rendered(&chapter.verses);
    assert_eq!(rendered.first().unwrap().text, "اهدنا الصراط المستقيم");
}

#[test]
fn test_deep_link_out_of_range_is_an_error_not_a_panic() {
    let corpus = fixture_corpus();

    // Route parameters are user input; both indices are bounds-checked.
    assert!(matches!(
        corpus.chapter_at(99),
        Err(HudaError::ChapterOutOfRange { .. })
    ));
    let fatiha = corpus.chapter(1).unwrap();
    assert!(matches!(
        fatiha.verse(7),
        Err(HudaError::VerseOutOfRange { .. })
    ));
}

#[test]
fn test_search_drives_chapter_list() {
    let corpus = fixture_corpus();

    let all = corpus.search("");
    assert_eq!(
        all.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![1, 2, 3],
        "empty query keeps source order"
    );

    let hits = corpus.search("بقرة");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
}

#[test]
fn test_qibla_view_with_fixed_location() {
    let provider = FixedLocation::default();
    let observer = provider.locate().unwrap();
    assert_eq!(observer, RIYADH_FALLBACK);

    let mut state = HeadingState::for_observer(observer);
    assert_eq!(state.direction(), CompassPoint::SouthWest);

    // Real sensor samples arrive.
    let mut sensor = SensorHeading::new();
    sensor.push(250.0);
    state.update_heading(sensor.heading());
    assert_eq!(state.relative_angle(), -6);
    assert_eq!(state.direction(), CompassPoint::North);
}

#[test]
fn test_qibla_view_with_manual_simulation() {
    let mut state = HeadingState::for_observer(RIYADH_FALLBACK);
    let mut sim = ManualStepHeading::new();

    // Each press rotates the simulated device 45°; after a full turn
    // the relative angle is back where it started.
    let initial = state.relative_angle();
    for _ in 0..8 {
        sim.step();
        state.update_heading(sim.heading());
    }
    assert_eq!(state.relative_angle(), initial);
}

#[test]
fn test_permission_denied_supports_manual_retry() {
    #[derive(Debug)]
    struct DeniedOnce {
        granted: std::sync::atomic::AtomicBool,
    }

    impl LocationProvider for DeniedOnce {
        fn locate(&self) -> Result<GeoCoordinate, HudaError> {
            if self.granted.swap(true, std::sync::atomic::Ordering::SeqCst) {
                Ok(RIYADH_FALLBACK)
            } else {
                Err(HudaError::permission_denied("location"))
            }
        }
    }

    let provider = DeniedOnce {
        granted: std::sync::atomic::AtomicBool::new(false),
    };

    let first = provider.locate();
    assert!(matches!(first, Err(HudaError::PermissionDenied { .. })));

    // The retry action re-runs the whole sequence from scratch.
    let observer = provider.locate().unwrap();
    let state = HeadingState::for_observer(observer);
    assert!((state.target_bearing() - 243.798).abs() < 0.5);
}

#[test]
fn test_windowing_over_a_long_chapter() {
    let verses: Vec<Verse> = (0..286)
        .map(|i| Verse {
            text: format!("آية {}", i + 1),
        })
        .collect();

    let mut window = VerseWindow::new(35);
    assert_eq!(window.visible(&verses).len(), 85);

    assert!(window.on_scroll(1200.0, 800.0, 2000.0));
    assert_eq!(window.visible(&verses).len(), 105);

    // Growth keeps going until the clamp takes over.
    for _ in 0..20 {
        window.on_scroll(1200.0, 800.0, 2000.0);
    }
    assert_eq!(window.visible(&verses).len(), 286);
}

#[test]
fn test_prayer_schedule_next_and_formatting() {
    use chrono::NaiveTime;

    let now = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
    let next = next_prayer(now).unwrap();
    assert_eq!(next.kind, PrayerKind::Maghrib);
    assert_eq!(format_12h(next.time), "6:15 م");

    let schedule = daily_schedule();
    assert_eq!(format_12h(schedule[0].time), "5:30 ص");
}
